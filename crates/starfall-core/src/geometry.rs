//! Geometric primitives for scene placement and painting.
//!
//! [`Point`] positions a body, [`Size`] is a surface (and the scene's
//! viewport) and [`Bounds`] is an axis-aligned box used for placement areas
//! and overlay layout.
//!
//! Surface space follows SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are in radians and grow clockwise on screen, since +Y points down.

use serde::Deserialize;

/// A position on the drawing surface.
///
/// # Examples
///
/// ```
/// # use starfall_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// assert_eq!(p1.distance(p2), p2.distance(p1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates the point at `distance` from `center` in direction `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use starfall_core::geometry::Point;
    /// let p = Point::from_polar(Point::new(10.0, 10.0), 0.0, 5.0);
    /// assert_eq!(p, Point::new(15.0, 10.0));
    /// ```
    pub fn from_polar(center: Point, angle: f32, distance: f32) -> Self {
        Self {
            x: center.x + angle.cos() * distance,
            y: center.y + angle.sin() * distance,
        }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise sum, used to offset a point by a vector.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Vector from `other` to `self`.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Length of the point read as a vector
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Straight-line distance to `other`
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use starfall_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(100.0, 50.0);
    /// assert_eq!(a.lerp(b, 0.5), Point::new(50.0, 25.0));
    /// ```
    pub fn lerp(self, other: Point, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Clamps the point into the given bounds (edges inclusive).
    pub fn clamp_to(self, bounds: Bounds) -> Self {
        Self {
            x: self.x.max(bounds.min_x).min(bounds.max_x),
            y: self.y.max(bounds.min_y).min(bounds.max_y),
        }
    }
}

/// Width and height of a surface.
///
/// A `Size` doubles as the viewport of a scene: the drawing surface spans
/// from `(0, 0)` to `(width, height)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal extent
    pub fn width(self) -> f32 {
        self.width
    }

    /// Vertical extent
    pub fn height(self) -> f32 {
        self.height
    }

    /// Shorter side, the reference length for size-relative placement
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Middle of the surface
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns true if either side is zero, negative or not a number.
    ///
    /// An empty surface has nothing to draw on.
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Bounds covering the whole surface, anchored at the origin
    pub fn to_bounds(self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self)
    }

    /// Bounds of the box spanning fractions `[from, to]` of each axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use starfall_core::geometry::Size;
    /// let inner = Size::new(200.0, 100.0).fractional_bounds(0.1, 0.9);
    /// assert_eq!(inner.min_x(), 20.0);
    /// assert_eq!(inner.max_y(), 90.0);
    /// ```
    pub fn fractional_bounds(self, from: f32, to: f32) -> Bounds {
        Bounds {
            min_x: self.width * from,
            min_y: self.height * from,
            max_x: self.width * to,
            max_y: self.height * to,
        }
    }
}

/// Axis-aligned box between `(min_x, min_y)` and `(max_x, max_y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Box whose top-left corner is `top_left`
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Top-left corner
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns true if the point lies inside the bounds (edges inclusive)
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_from_polar() {
        let center = Point::new(100.0, 100.0);

        let down = Point::from_polar(center, PI / 2.0, 10.0);
        assert_approx_eq!(f32, down.x(), 100.0, epsilon = 1e-4);
        assert_approx_eq!(f32, down.y(), 110.0, epsilon = 1e-4);

        let left = Point::from_polar(center, PI, 10.0);
        assert_approx_eq!(f32, left.x(), 90.0, epsilon = 1e-4);
        assert_approx_eq!(f32, left.y(), 100.0, epsilon = 1e-4);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, a.distance(b), 5.0);
        assert_approx_eq!(f32, b.distance(a), 5.0);
    }

    #[test]
    fn test_point_clamp_to() {
        let bounds = Size::new(100.0, 50.0).to_bounds();

        assert_eq!(
            Point::new(-5.0, 60.0).clamp_to(bounds),
            Point::new(0.0, 50.0)
        );
        assert_eq!(
            Point::new(40.0, 20.0).clamp_to(bounds),
            Point::new(40.0, 20.0)
        );
    }

    #[test]
    fn test_size_helpers() {
        let size = Size::new(1280.0, 800.0);
        assert_approx_eq!(f32, size.min_side(), 800.0);
        assert_eq!(size.center(), Point::new(640.0, 400.0));
        assert!(!size.is_empty());

        assert!(Size::new(0.0, 800.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
        assert!(Size::new(f32::NAN, 10.0).is_empty());
        assert!(Size::default().is_empty());
    }

    #[test]
    fn test_bounds_contains_and_center() {
        let bounds = Bounds::new_from_top_left(Point::new(40.0, 45.0), Size::new(20.0, 10.0));
        assert_approx_eq!(f32, bounds.min_x(), 40.0);
        assert_approx_eq!(f32, bounds.max_y(), 55.0);
        assert!(bounds.contains(Point::new(40.0, 45.0)));
        assert!(!bounds.contains(Point::new(39.9, 50.0)));
        assert_eq!(bounds.center(), Point::new(50.0, 50.0));
    }

    proptest! {
        #[test]
        fn prop_clamped_point_is_inside(
            x in -1000.0f32..2000.0,
            y in -1000.0f32..2000.0,
            w in 1.0f32..1500.0,
            h in 1.0f32..1500.0,
        ) {
            let bounds = Size::new(w, h).to_bounds();
            prop_assert!(bounds.contains(Point::new(x, y).clamp_to(bounds)));
        }

        #[test]
        fn prop_polar_distance_matches(
            angle in 0.0f32..(2.0 * PI),
            distance in 0.0f32..500.0,
        ) {
            let center = Point::new(250.0, 250.0);
            let p = Point::from_polar(center, angle, distance);
            prop_assert!((p.distance(center) - distance).abs() < 1e-2);
        }
    }
}
