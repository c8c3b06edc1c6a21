//! Stroke styles for lines, arcs and curves.
//!
//! A [`StrokeDefinition`] carries a [`Paint`] (solid or gradient), a width
//! and a [`StrokeCap`]. The canvas resolves the paint and hands the result
//! to [`apply_stroke!`](crate::apply_stroke!), which writes the `stroke-*`
//! attributes.

use crate::{color::Color, draw::Paint};

/// Line ending, written as `stroke-linecap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Ends exactly at the endpoint
    #[default]
    Butt,
    /// Half-disc past the endpoint; used for sun flares
    Round,
}

impl StrokeCap {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Paint, width and cap of a stroked primitive.
///
/// # Examples
///
/// ```
/// use starfall_core::color::Color;
/// use starfall_core::draw::{StrokeCap, StrokeDefinition};
///
/// let mut trail = StrokeDefinition::solid(Color::rgba(255, 255, 255, 0.6), 2.0);
/// trail.set_cap(StrokeCap::Round);
/// assert_eq!(trail.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    paint: Paint,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
            cap: StrokeCap::default(),
        }
    }

    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Sets `fill="none"` and the stroke attributes on an SVG element.
///
/// `$paint_value` is the already resolved paint (a CSS color or a
/// `url(#id)` reference) and `$opacity` its opacity.
///
/// ```
/// use starfall_core::color::Color;
/// use starfall_core::draw::StrokeDefinition;
/// use svg::node::element::Line;
///
/// let stroke = StrokeDefinition::solid(Color::rgba(255, 255, 255, 0.2), 1.5);
/// let line = starfall_core::apply_stroke!(Line::new(), &stroke, "white", 0.2);
/// assert!(line.to_string().contains("stroke-width=\"1.5\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr, $paint_value:expr, $opacity:expr) => {{
        $element
            .set("fill", "none")
            .set("stroke", $paint_value)
            .set("stroke-opacity", $opacity)
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    }};
}
