use starfall_core::{
    draw::{Canvas, Gradient, Paint},
    geometry::Point,
};

use crate::scene::BackgroundTheme;

/// Fills the whole surface with the theme's corner-to-corner gradient.
pub fn paint(canvas: &mut Canvas, theme: &BackgroundTheme) {
    let size = canvas.size();
    let [start, middle, end] = theme.stops();
    let gradient = Gradient::linear(Point::default(), Point::new(size.width(), size.height()))
        .with_stop(0.0, start)
        .with_stop(0.5, middle)
        .with_stop(1.0, end);

    canvas.fill_rect(Point::default(), size, &Paint::from(gradient));
}

#[cfg(test)]
mod tests {
    use starfall_core::{draw::RenderLayer, geometry::Size};

    use super::*;

    #[test]
    fn test_background_is_one_gradient_rect() {
        let mut canvas = Canvas::new(Size::new(200.0, 100.0));
        paint(&mut canvas, &BackgroundTheme::by_index(0));

        let output = canvas.finish();
        assert_eq!(output.layer_len(RenderLayer::Background), 1);
        assert_eq!(output.definitions_len(), 1);
    }
}
