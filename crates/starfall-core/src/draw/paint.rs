//! Fill and stroke paints: solid colors and gradients.
//!
//! Gradients follow 2D-canvas semantics. Coordinates are in the user space of
//! the primitive that uses the gradient, and a radial gradient may start at a
//! non-zero inner radius (mapped to the SVG `fr` attribute).

use svg::node::element as svg_element;

use crate::{color::Color, draw::SvgNode, geometry::Point};

/// A color stop along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    offset: f32,
    color: Color,
}

impl GradientStop {
    /// Creates a stop; `offset` is clamped into `[0, 1]`.
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }

    /// Returns the stop offset in `[0, 1]`
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns the stop color
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Geometry of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Color varies along the line from `start` to `end`.
    Linear { start: Point, end: Point },
    /// Color varies between two concentric circles.
    Radial {
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
    },
}

/// A linear or radial gradient with ordered color stops.
///
/// # Examples
///
/// ```
/// use starfall_core::{color::Color, draw::Gradient, geometry::Point};
///
/// let glow = Gradient::radial(Point::new(50.0, 50.0), 0.0, 40.0)
///     .with_stop(0.0, Color::rgba(255, 255, 220, 1.0))
///     .with_stop(1.0, Color::rgba(255, 50, 0, 0.0));
/// assert_eq!(glow.stops().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Creates a linear gradient without stops.
    pub fn linear(start: Point, end: Point) -> Self {
        Self {
            kind: GradientKind::Linear { start, end },
            stops: Vec::new(),
        }
    }

    /// Creates a radial gradient without stops.
    pub fn radial(center: Point, inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            kind: GradientKind::Radial {
                center,
                inner_radius,
                outer_radius,
            },
            stops: Vec::new(),
        }
    }

    /// Appends a color stop (builder style).
    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.add_stop(offset, color);
        self
    }

    /// Appends a color stop.
    pub fn add_stop(&mut self, offset: f32, color: Color) {
        self.stops.push(GradientStop::new(offset, color));
    }

    /// Returns the gradient geometry
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Returns the color stops in insertion order
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Renders this gradient as an SVG definition with the given `id`.
    pub fn to_svg(&self, id: &str) -> SvgNode {
        let stops = self.stops.iter().map(|stop| {
            svg_element::Stop::new()
                .set("offset", stop.offset)
                .set("stop-color", &stop.color)
                .set("stop-opacity", stop.color.alpha())
        });

        match self.kind {
            GradientKind::Linear { start, end } => {
                let mut gradient = svg_element::LinearGradient::new()
                    .set("id", id)
                    .set("gradientUnits", "userSpaceOnUse")
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y());
                for stop in stops {
                    gradient = gradient.add(stop);
                }
                Box::new(gradient)
            }
            GradientKind::Radial {
                center,
                inner_radius,
                outer_radius,
            } => {
                let mut gradient = svg_element::RadialGradient::new()
                    .set("id", id)
                    .set("gradientUnits", "userSpaceOnUse")
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", outer_radius)
                    .set("fr", inner_radius);
                for stop in stops {
                    gradient = gradient.add(stop);
                }
                Box::new(gradient)
            }
        }
    }
}

/// What a primitive is filled or stroked with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::default())
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}
