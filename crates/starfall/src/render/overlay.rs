//! The page's title and link buttons, painted over the scene.
//!
//! The column is at most 448 wide and centered on both axes: a title, a
//! 48px gap, then one 56px button per link with 20px between buttons.

use starfall_core::{
    color::Color,
    draw::{Canvas, FontSpec, Gradient, Paint, StrokeDefinition, TextAnchor},
    geometry::{Bounds, Point, Size},
};

use crate::config::{ButtonAccent, PageConfig};

const COLUMN_MAX_WIDTH: f32 = 448.0;
const TITLE_GAP: f32 = 48.0;
const BUTTON_HEIGHT: f32 = 56.0;
const BUTTON_GAP: f32 = 20.0;
const BUTTON_RADIUS: f32 = 6.0;
const BUTTON_FONT_SIZE: f32 = 18.0;
const BUTTON_FILL_ALPHA: f32 = 0.8;
const BUTTON_BORDER_ALPHA: f32 = 0.4;

/// Surfaces at least this wide get the large title.
const WIDE_VIEWPORT: f32 = 768.0;
const TITLE_SIZE_WIDE: f32 = 96.0;
const TITLE_SIZE_NARROW: f32 = 60.0;

/// Baseline position as a fraction of the font size below the line top.
const ASCENT: f32 = 0.8;

const FONT_FAMILY: &str = "sans-serif";

/// Where the overlay puts its title and buttons on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    title_size: f32,
    title_bounds: Bounds,
    buttons: Vec<Bounds>,
}

impl OverlayLayout {
    /// Lays out a title and `button_count` buttons on a surface of `size`.
    pub fn compute(size: Size, button_count: usize) -> Self {
        let title_size = if size.width() >= WIDE_VIEWPORT {
            TITLE_SIZE_WIDE
        } else {
            TITLE_SIZE_NARROW
        };
        let column_width = size.width().min(COLUMN_MAX_WIDTH);
        let buttons_height = if button_count == 0 {
            0.0
        } else {
            button_count as f32 * BUTTON_HEIGHT + (button_count - 1) as f32 * BUTTON_GAP
        };
        let total_height = title_size + TITLE_GAP + buttons_height;

        let left = (size.width() - column_width) / 2.0;
        let top = (size.height() - total_height) / 2.0;
        let title_bounds =
            Bounds::new_from_top_left(Point::new(left, top), Size::new(column_width, title_size));

        let first_button = top + title_size + TITLE_GAP;
        let buttons = (0..button_count)
            .map(|i| {
                let y = first_button + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
                Bounds::new_from_top_left(
                    Point::new(left, y),
                    Size::new(column_width, BUTTON_HEIGHT),
                )
            })
            .collect();

        Self {
            title_size,
            title_bounds,
            buttons,
        }
    }

    pub fn title_size(&self) -> f32 {
        self.title_size
    }

    pub fn title_bounds(&self) -> Bounds {
        self.title_bounds
    }

    /// Button rectangles, top to bottom.
    pub fn buttons(&self) -> &[Bounds] {
        &self.buttons
    }
}

/// Fill gradient stops (from, via, to) and border color of a button accent.
fn accent_palette(accent: ButtonAccent) -> ([Color; 3], Color) {
    let blue = Color::rgba(23, 37, 84, 1.0);
    let indigo = Color::rgba(30, 27, 75, 1.0);
    let violet = Color::rgba(46, 16, 101, 1.0);
    let fuchsia = Color::rgba(74, 4, 78, 1.0);
    let purple = Color::rgba(59, 7, 100, 1.0);
    let pink = Color::rgba(80, 7, 36, 1.0);
    let amber = Color::rgba(69, 26, 3, 1.0);
    let cyan = Color::rgba(8, 51, 68, 1.0);

    match accent {
        ButtonAccent::Blue => ([blue, indigo, violet], Color::rgba(96, 165, 250, 1.0)),
        ButtonAccent::Fuchsia => ([fuchsia, purple, pink], Color::rgba(232, 121, 249, 1.0)),
        ButtonAccent::Pink => ([pink, purple, amber], Color::rgba(244, 114, 182, 1.0)),
        ButtonAccent::Cyan => ([cyan, blue, indigo], Color::rgba(34, 211, 238, 1.0)),
    }
}

pub fn paint(canvas: &mut Canvas, page: &PageConfig) {
    let layout = OverlayLayout::compute(canvas.size(), page.links().len());
    paint_title(canvas, page.title(), &layout);

    let font = FontSpec::new(BUTTON_FONT_SIZE, FONT_FAMILY).with_weight(500);
    let white = Paint::from(Color::rgba(255, 255, 255, 1.0));

    for (link, bounds) in page.links().iter().zip(layout.buttons()) {
        let top_left = bounds.min_point();
        let size = Size::new(bounds.width(), bounds.height());
        let ([from, via, to], border) = accent_palette(link.accent());
        let fill = Gradient::linear(top_left, Point::new(bounds.max_x(), bounds.max_y()))
            .with_stop(0.0, from.with_alpha(BUTTON_FILL_ALPHA))
            .with_stop(0.5, via.with_alpha(BUTTON_FILL_ALPHA))
            .with_stop(1.0, to.with_alpha(BUTTON_FILL_ALPHA));
        let outline = StrokeDefinition::solid(border.with_alpha(BUTTON_BORDER_ALPHA), 1.0);
        let baseline = Point::new(
            bounds.center().x(),
            bounds.center().y() + BUTTON_FONT_SIZE * 0.35,
        );

        canvas.with_link(link.href(), |canvas| {
            canvas.fill_rounded_rect(top_left, size, BUTTON_RADIUS, &Paint::from(fill));
            canvas.stroke_rounded_rect(top_left, size, BUTTON_RADIUS, &outline);
            canvas.fill_text(baseline, link.label(), &font, TextAnchor::Middle, &white);
        });
    }
}

/// White title fading slightly towards its bottom edge.
fn paint_title(canvas: &mut Canvas, title: &str, layout: &OverlayLayout) {
    let bounds = layout.title_bounds();
    let white = Color::rgba(255, 255, 255, 1.0);
    let fill = Gradient::linear(
        Point::new(bounds.center().x(), bounds.min_y()),
        Point::new(bounds.center().x(), bounds.max_y()),
    )
    .with_stop(0.0, white)
    .with_stop(0.5, white)
    .with_stop(1.0, white.with_alpha(0.7));

    let font = FontSpec::new(layout.title_size(), FONT_FAMILY).with_weight(800);
    let baseline = Point::new(
        bounds.center().x(),
        bounds.min_y() + layout.title_size() * ASCENT,
    );
    canvas.fill_text(baseline, title, &font, TextAnchor::Middle, &Paint::from(fill));
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use starfall_core::draw::RenderLayer;

    use super::*;

    #[test]
    fn test_layout_centers_column() {
        let layout = OverlayLayout::compute(Size::new(1280.0, 800.0), 5);

        assert_approx_eq!(f32, layout.title_size(), TITLE_SIZE_WIDE);
        assert_eq!(layout.buttons().len(), 5);

        // 96 + 48 + 5 * 56 + 4 * 20 = 504
        let title = layout.title_bounds();
        assert_approx_eq!(f32, title.min_y(), 148.0);
        assert_approx_eq!(f32, title.min_x(), 416.0);
        assert_approx_eq!(f32, title.width(), COLUMN_MAX_WIDTH);

        let last = layout.buttons()[4];
        assert_approx_eq!(f32, last.max_y(), 652.0);
        assert_approx_eq!(f32, last.height(), BUTTON_HEIGHT);
    }

    #[test]
    fn test_buttons_are_evenly_spaced() {
        let layout = OverlayLayout::compute(Size::new(1280.0, 800.0), 3);
        for pair in layout.buttons().windows(2) {
            assert_approx_eq!(f32, pair[1].min_y() - pair[0].max_y(), BUTTON_GAP);
        }
    }

    #[test]
    fn test_narrow_surface_shrinks_column_and_title() {
        let layout = OverlayLayout::compute(Size::new(360.0, 640.0), 2);

        assert_approx_eq!(f32, layout.title_size(), TITLE_SIZE_NARROW);
        assert_approx_eq!(f32, layout.title_bounds().width(), 360.0);
        assert_approx_eq!(f32, layout.buttons()[0].min_x(), 0.0);
    }

    #[test]
    fn test_accent_fill_matches_border_family() {
        let (stops, border) = accent_palette(ButtonAccent::Cyan);
        assert_eq!(stops[0], Color::rgba(8, 51, 68, 1.0));
        assert_eq!(border, Color::rgba(34, 211, 238, 1.0));
    }

    #[test]
    fn test_buttons_link_to_pages() {
        let page = PageConfig::default();
        let mut canvas = Canvas::new(Size::new(1280.0, 800.0));
        canvas.set_layer(RenderLayer::Overlay);
        paint(&mut canvas, &page);

        let output = canvas.finish();
        // title plus one link per button
        assert_eq!(output.layer_len(RenderLayer::Overlay), 1 + page.links().len());

        let svg: String = output.render().iter().map(ToString::to_string).collect();
        for link in page.links() {
            assert!(svg.contains(link.href()));
            assert!(svg.contains(link.label()));
        }
        assert!(svg.contains(page.title()));
    }
}
