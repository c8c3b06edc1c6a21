use starfall_core::{
    color::Color,
    draw::{Canvas, FontSpec, Paint, StrokeDefinition, TextAnchor},
};

use crate::scene::{constellations::Constellation, shooting_star::ShootingStar, stars::Star};

const LABEL_FONT_SIZE: f32 = 14.0;

pub fn paint_stars(canvas: &mut Canvas, stars: &[Star]) {
    for star in stars {
        canvas.fill_circle(star.position(), star.size(), &Paint::from(star.color()));
    }
}

/// Connection lines with the name on top; the anchor stars stay invisible.
pub fn paint_constellations(canvas: &mut Canvas, constellations: &[Constellation], names: bool) {
    let line = StrokeDefinition::solid(Color::rgba(255, 255, 255, 0.2), 1.5);
    let label_paint = Paint::from(Color::rgba(200, 220, 255, 0.6));
    let font = FontSpec::new(LABEL_FONT_SIZE, "sans-serif");

    for constellation in constellations {
        for (from, to) in constellation.segments() {
            canvas.stroke_line(from, to, &line);
        }
        if names {
            canvas.fill_text(
                constellation.label(),
                constellation.name(),
                &font,
                TextAnchor::Start,
                &label_paint,
            );
        }
    }
}

pub fn paint_shooting_stars(canvas: &mut Canvas, shooting_stars: &[ShootingStar]) {
    for star in shooting_stars.iter().filter(|star| star.is_active()) {
        let trail = StrokeDefinition::solid(Color::rgba(255, 255, 255, star.opacity()), 2.0);
        canvas.stroke_line(star.head(), star.tail(), &trail);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use starfall_core::{
        draw::RenderLayer,
        geometry::{Point, Size},
    };

    use super::*;
    use crate::{config::CountRange, scene::constellations};

    fn canvas() -> Canvas {
        let mut canvas = Canvas::new(Size::new(1280.0, 800.0));
        canvas.set_layer(RenderLayer::Constellations);
        canvas
    }

    #[test]
    fn test_stars_paint_one_disc_each() {
        let stars = vec![
            Star::new(Point::new(10.0, 10.0), 1.0, 0.8, 0.02, [255, 255, 255]),
            Star::new(Point::new(20.0, 30.0), 2.0, 0.5, -0.02, [255, 200, 150]),
        ];
        let mut canvas = canvas();
        paint_stars(&mut canvas, &stars);
        assert_eq!(canvas.finish().layer_len(RenderLayer::Constellations), 2);
    }

    #[test]
    fn test_constellations_paint_lines_and_names_only() {
        let mut rng = StdRng::seed_from_u64(12);
        let constellations =
            constellations::generate(&mut rng, Size::new(1280.0, 800.0), CountRange::new(3, 3));
        assert!(!constellations.is_empty());

        let painted = |names: bool| {
            let mut canvas = canvas();
            paint_constellations(&mut canvas, &constellations, names);
            canvas.finish().layer_len(RenderLayer::Constellations)
        };

        let without_names: usize = constellations
            .iter()
            .map(|c| c.segments().count())
            .sum();
        assert_eq!(painted(false), without_names);
        assert_eq!(painted(true), without_names + constellations.len());
    }

    #[test]
    fn test_shooting_star_is_a_white_line() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut star = ShootingStar::spawn(&mut rng, Size::new(800.0, 600.0));
        star.advance(50.0);

        let mut canvas = canvas();
        paint_shooting_stars(&mut canvas, &[star]);
        let svg: String = canvas
            .finish()
            .render()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(svg.contains("<line"));
        assert!(svg.contains("stroke-width=\"2\""));
    }
}
