//! Planets, the satellite and the small black hole.

use starfall_core::{
    color::Color,
    draw::{Canvas, Gradient, Paint, StrokeDefinition, Transform},
    geometry::{Point, Size},
};

use crate::scene::{
    black_hole::CenterBlackHole,
    planets::{DetailKind, Planet, SurfaceDetail},
    satellite::Satellite,
};

const CLOUD_OPACITY: f32 = 0.7;

pub fn paint_planets(canvas: &mut Canvas, planets: &[Planet]) {
    for planet in planets {
        paint_planet(canvas, planet);
    }
}

/// Body, surface details, rings and moon, in that order.
fn paint_planet(canvas: &mut Canvas, planet: &Planet) {
    let position = planet.position();
    canvas.fill_circle(position, planet.radius(), &Paint::from(planet.color()));

    for detail in planet.details() {
        paint_detail(canvas, position, detail);
    }

    if let Some(rings) = planet.rings() {
        let transform = Transform::identity().translate(position).rotate(rings.tilt());
        canvas.with_group(&transform, 1.0, |canvas| {
            canvas.fill_ellipse(
                Point::default(),
                planet.radius() + rings.width(),
                planet.radius() * 0.7,
                &Paint::from(rings.color()),
            );
        });
    }

    if let (Some(moon), Some(moon_position)) = (planet.moon(), planet.moon_position()) {
        canvas.fill_circle(moon_position, moon.size(), &Paint::from(moon.color()));
    }
}

/// Paints one detail in its own frame centered on the detail.
fn paint_detail(canvas: &mut Canvas, planet_position: Point, detail: &SurfaceDetail) {
    let mut transform = Transform::identity().translate(planet_position.add_point(detail.offset()));
    if let Some(stretch) = detail.stretch() {
        transform = transform.rotate(stretch.angle());
    }
    let opacity = if detail.kind() == DetailKind::Cloud {
        CLOUD_OPACITY
    } else {
        1.0
    };
    let paint = Paint::from(detail.color());
    let size = detail.size();

    canvas.with_group(&transform, opacity, |canvas| match detail.kind() {
        DetailKind::Crater => {
            canvas.fill_circle(Point::default(), size, &paint);
            let rim = StrokeDefinition::solid(Color::rgba(0, 0, 0, 0.3), size / 5.0);
            canvas.stroke_circle(Point::default(), size, &rim);
        }
        DetailKind::Spot => canvas.fill_circle(Point::default(), size, &paint),
        DetailKind::Band | DetailKind::Cloud => {
            let width = detail.stretch().map_or(size, |stretch| stretch.width());
            canvas.fill_rect(
                Point::new(-width / 2.0, -size / 2.0),
                Size::new(width, size),
                &paint,
            );
        }
    });
}

/// Round body with a flat solar panel across it.
pub fn paint_satellite(canvas: &mut Canvas, satellite: &Satellite) {
    let position = satellite.position();
    let size = satellite.size();

    canvas.fill_circle(position, size, &Paint::from(Color::rgba(180, 180, 180, 0.8)));
    canvas.fill_rect(
        Point::new(position.x() - size * 1.5, position.y() - size * 0.3),
        Size::new(size * 3.0, size * 0.6),
        &Paint::from(Color::rgba(50, 50, 50, 0.9)),
    );
}

pub fn paint_black_hole(canvas: &mut Canvas, black_hole: &CenterBlackHole) {
    let radius = black_hole.radius();
    let gradient = Gradient::radial(Point::default(), 0.0, radius)
        .with_stop(0.0, Color::rgba(0, 0, 0, 1.0))
        .with_stop(1.0, Color::rgba(50, 50, 50, 0.8));

    let transform = Transform::identity()
        .translate(black_hole.center())
        .rotate(black_hole.rotation());
    canvas.with_group(&transform, 1.0, |canvas| {
        canvas.fill_circle(Point::default(), radius, &Paint::from(gradient));
    });
}
