//! Coordinate transforms for grouped drawing.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Translate(Point),
    Rotate(f32),
    Scale(f32, f32),
}

/// A sequence of translate / rotate / scale steps.
///
/// Steps compose like successive canvas `translate`, `rotate` and `scale`
/// calls: each one applies in the coordinate system produced by the previous
/// ones. Rotation is in radians.
///
/// # Examples
///
/// ```
/// use starfall_core::{draw::Transform, geometry::Point};
///
/// let disk = Transform::identity()
///     .translate(Point::new(100.0, 50.0))
///     .rotate(0.0)
///     .scale(1.0, 0.3);
/// assert_eq!(disk.to_svg_value(), "translate(100 50) rotate(0) scale(1 0.3)");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transform {
    steps: Vec<Step>,
}

impl Transform {
    /// The transform that leaves coordinates unchanged
    pub fn identity() -> Self {
        Self::default()
    }

    /// Shifts the origin to `offset`
    pub fn translate(mut self, offset: Point) -> Self {
        self.steps.push(Step::Translate(offset));
        self
    }

    /// Rotates around the current origin by `angle` radians
    pub fn rotate(mut self, angle: f32) -> Self {
        self.steps.push(Step::Rotate(angle));
        self
    }

    /// Scales around the current origin
    pub fn scale(mut self, sx: f32, sy: f32) -> Self {
        self.steps.push(Step::Scale(sx, sy));
        self
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Renders the steps as an SVG `transform` attribute value.
    pub fn to_svg_value(&self) -> String {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Translate(p) => format!("translate({} {})", p.x(), p.y()),
                Step::Rotate(angle) => format!("rotate({})", angle.to_degrees()),
                Step::Scale(sx, sy) => format!("scale({sx} {sy})"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let transform = Transform::identity();
        assert!(transform.is_identity());
        assert_eq!(transform.to_svg_value(), "");
    }

    #[test]
    fn test_step_order_is_preserved() {
        let transform = Transform::identity()
            .rotate(0.0)
            .translate(Point::new(1.0, 2.0));
        assert!(!transform.is_identity());
        assert_eq!(transform.to_svg_value(), "rotate(0) translate(1 2)");
    }
}
