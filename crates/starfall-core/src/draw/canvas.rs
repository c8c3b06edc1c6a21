//! Immediate-mode painter that records SVG.
//!
//! [`Canvas`] mirrors the subset of the HTML 2D-canvas API that scene
//! painting needs. Each call appends one SVG element to the current
//! [`RenderLayer`] (or to the innermost open group). Gradient paints are
//! registered as definitions with ids unique within the canvas.
//!
//! # Example
//!
//! ```
//! use starfall_core::{
//!     color::Color,
//!     draw::{Canvas, Paint, RenderLayer},
//!     geometry::{Point, Size},
//! };
//!
//! let mut canvas = Canvas::new(Size::new(200.0, 100.0));
//! canvas.set_layer(RenderLayer::Stars);
//! canvas.fill_circle(Point::new(20.0, 30.0), 1.2, &Paint::from(Color::rgba(255, 255, 255, 0.7)));
//!
//! let output = canvas.finish();
//! assert_eq!(output.layer_len(RenderLayer::Stars), 1);
//! ```

use std::f32::consts::{PI, TAU};

use log::trace;
use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{LayeredOutput, Paint, RenderLayer, StrokeDefinition, SvgNode, Transform},
    geometry::{Point, Size},
};

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Font used by [`Canvas::fill_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    size: f32,
    family: String,
    weight: u16,
}

impl FontSpec {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self {
            size,
            family: family.into(),
            weight: 400,
        }
    }

    /// Sets the numeric font weight (builder style).
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(14.0, "sans-serif")
    }
}

/// Records painting calls as layered SVG.
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    layer: RenderLayer,
    output: LayeredOutput,
    open_groups: Vec<Vec<SvgNode>>,
    gradient_count: usize,
    id_prefix: String,
}

impl Canvas {
    /// Creates an empty canvas covering a surface of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            layer: RenderLayer::Background,
            output: LayeredOutput::new(),
            open_groups: Vec::new(),
            gradient_count: 0,
            id_prefix: String::new(),
        }
    }

    /// Prefixes every generated definition id (builder style).
    ///
    /// Needed when several canvases end up in one SVG document.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Returns the surface size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the layer new primitives are recorded on
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    /// Switches the layer new primitives are recorded on
    pub fn set_layer(&mut self, layer: RenderLayer) {
        self.layer = layer;
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, top_left: Point, size: Size, paint: &Paint) {
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return;
        }
        let (value, opacity) = self.resolve_paint(paint);
        let rect = svg_element::Rectangle::new()
            .set("x", round2(top_left.x()))
            .set("y", round2(top_left.y()))
            .set("width", round2(size.width()))
            .set("height", round2(size.height()))
            .set("fill", value)
            .set("fill-opacity", opacity);
        self.push(Box::new(rect));
    }

    /// Fills a rectangle with rounded corners.
    pub fn fill_rounded_rect(&mut self, top_left: Point, size: Size, radius: f32, paint: &Paint) {
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return;
        }
        let (value, opacity) = self.resolve_paint(paint);
        let rect = svg_element::Rectangle::new()
            .set("x", round2(top_left.x()))
            .set("y", round2(top_left.y()))
            .set("width", round2(size.width()))
            .set("height", round2(size.height()))
            .set("rx", round2(radius))
            .set("fill", value)
            .set("fill-opacity", opacity);
        self.push(Box::new(rect));
    }

    /// Strokes the outline of a rounded rectangle.
    pub fn stroke_rounded_rect(
        &mut self,
        top_left: Point,
        size: Size,
        radius: f32,
        stroke: &StrokeDefinition,
    ) {
        let (value, opacity) = self.resolve_paint(stroke.paint());
        let rect = svg_element::Rectangle::new()
            .set("x", round2(top_left.x()))
            .set("y", round2(top_left.y()))
            .set("width", round2(size.width()))
            .set("height", round2(size.height()))
            .set("rx", round2(radius));
        self.push(Box::new(apply_stroke!(rect, stroke, value, opacity)));
    }

    /// Fills a full circle. Non-positive radii draw nothing.
    pub fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        if !is_positive(radius) {
            trace!(radius; "Skipping circle with non-positive radius");
            return;
        }
        let (value, opacity) = self.resolve_paint(paint);
        let circle = svg_element::Circle::new()
            .set("cx", round2(center.x()))
            .set("cy", round2(center.y()))
            .set("r", round2(radius))
            .set("fill", value)
            .set("fill-opacity", opacity);
        self.push(Box::new(circle));
    }

    /// Strokes the outline of a full circle.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &StrokeDefinition) {
        if !is_positive(radius) {
            return;
        }
        let (value, opacity) = self.resolve_paint(stroke.paint());
        let circle = svg_element::Circle::new()
            .set("cx", round2(center.x()))
            .set("cy", round2(center.y()))
            .set("r", round2(radius));
        self.push(Box::new(apply_stroke!(circle, stroke, value, opacity)));
    }

    /// Fills an axis-aligned ellipse; rotate it by painting inside a group.
    pub fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, paint: &Paint) {
        if !is_positive(radius_x) || !is_positive(radius_y) {
            return;
        }
        let (value, opacity) = self.resolve_paint(paint);
        let ellipse = svg_element::Ellipse::new()
            .set("cx", round2(center.x()))
            .set("cy", round2(center.y()))
            .set("rx", round2(radius_x))
            .set("ry", round2(radius_y))
            .set("fill", value)
            .set("fill-opacity", opacity);
        self.push(Box::new(ellipse));
    }

    /// Strokes a straight segment.
    pub fn stroke_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let (value, opacity) = self.resolve_paint(stroke.paint());
        let line = svg_element::Line::new()
            .set("x1", round2(from.x()))
            .set("y1", round2(from.y()))
            .set("x2", round2(to.x()))
            .set("y2", round2(to.y()));
        self.push(Box::new(apply_stroke!(line, stroke, value, opacity)));
    }

    /// Strokes a circular arc from `start_angle` to `end_angle` (radians),
    /// sweeping in the direction of increasing angle.
    ///
    /// Sweeps of a full turn or more stroke the whole circle.
    pub fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: &StrokeDefinition,
    ) {
        if !is_positive(radius) {
            return;
        }
        let sweep = end_angle - start_angle;
        if sweep.abs() >= TAU {
            self.stroke_circle(center, radius, stroke);
            return;
        }

        let start = Point::from_polar(center, start_angle, radius);
        let end = Point::from_polar(center, end_angle, radius);
        let large_arc = u8::from(sweep.abs() > PI);
        let sweep_flag = u8::from(sweep > 0.0);
        let data = format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            round2(start.x()),
            round2(start.y()),
            round2(radius),
            round2(radius),
            large_arc,
            sweep_flag,
            round2(end.x()),
            round2(end.y()),
        );

        let (value, opacity) = self.resolve_paint(stroke.paint());
        let path = svg_element::Path::new().set("d", data);
        self.push(Box::new(apply_stroke!(path, stroke, value, opacity)));
    }

    /// Strokes a cubic Bézier curve.
    pub fn stroke_bezier(
        &mut self,
        from: Point,
        control1: Point,
        control2: Point,
        to: Point,
        stroke: &StrokeDefinition,
    ) {
        let data = format!(
            "M {} {} C {} {}, {} {}, {} {}",
            round2(from.x()),
            round2(from.y()),
            round2(control1.x()),
            round2(control1.y()),
            round2(control2.x()),
            round2(control2.y()),
            round2(to.x()),
            round2(to.y()),
        );

        let (value, opacity) = self.resolve_paint(stroke.paint());
        let path = svg_element::Path::new().set("d", data);
        self.push(Box::new(apply_stroke!(path, stroke, value, opacity)));
    }

    /// Fills a single line of text with its baseline at `position`.
    pub fn fill_text(
        &mut self,
        position: Point,
        content: &str,
        font: &FontSpec,
        anchor: TextAnchor,
        paint: &Paint,
    ) {
        let (value, opacity) = self.resolve_paint(paint);
        let text = svg_element::Text::new(content)
            .set("x", round2(position.x()))
            .set("y", round2(position.y()))
            .set("font-size", font.size())
            .set("font-family", font.family())
            .set("font-weight", font.weight())
            .set("text-anchor", anchor.to_svg_value())
            .set("fill", value)
            .set("fill-opacity", opacity);
        self.push(Box::new(text));
    }

    /// Paints everything `draw` records inside one SVG group with the given
    /// transform and group opacity.
    ///
    /// Plays the role of `save()` / transform / `globalAlpha` / `restore()`.
    pub fn with_group(&mut self, transform: &Transform, opacity: f32, draw: impl FnOnce(&mut Self)) {
        self.open_groups.push(Vec::new());
        draw(self);
        let children = self.open_groups.pop().unwrap_or_default();
        if children.is_empty() {
            return;
        }

        let mut group = svg_element::Group::new();
        if !transform.is_identity() {
            group = group.set("transform", transform.to_svg_value());
        }
        if opacity < 1.0 {
            group = group.set("opacity", opacity.max(0.0));
        }
        for child in children {
            group = group.add(child);
        }
        self.push(Box::new(group));
    }

    /// Wraps everything `draw` records in a hyperlink opening in a new tab.
    pub fn with_link(&mut self, href: &str, draw: impl FnOnce(&mut Self)) {
        self.open_groups.push(Vec::new());
        draw(self);
        let children = self.open_groups.pop().unwrap_or_default();

        let mut anchor = svg_element::Anchor::new()
            .set("href", href)
            .set("target", "_blank")
            .set("rel", "noopener noreferrer");
        for child in children {
            anchor = anchor.add(child);
        }
        self.push(Box::new(anchor));
    }

    /// Ends painting and returns the recorded output.
    pub fn finish(self) -> LayeredOutput {
        self.output
    }

    fn push(&mut self, node: SvgNode) {
        match self.open_groups.last_mut() {
            Some(group) => group.push(node),
            None => self.output.add_to_layer(self.layer, node),
        }
    }

    /// Resolves a paint into an SVG paint value and an opacity, registering
    /// gradients as definitions.
    fn resolve_paint(&mut self, paint: &Paint) -> (String, f32) {
        match paint {
            Paint::Solid(color) => (color.to_opaque_string(), round3(color.alpha())),
            Paint::Gradient(gradient) => {
                let id = format!("{}g{}", self.id_prefix, self.gradient_count);
                self.gradient_count += 1;
                self.output.add_definition(gradient.to_svg(&id));
                (format!("url(#{id})"), 1.0)
            }
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Rounds to two decimals, plenty for screen-space coordinates.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, draw::Gradient};

    fn white() -> Paint {
        Paint::from(Color::rgba(255, 255, 255, 0.5))
    }

    fn rendered(canvas: Canvas) -> String {
        canvas
            .finish()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_fill_circle_records_on_current_layer() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.set_layer(RenderLayer::Planets);
        canvas.fill_circle(Point::new(10.0, 20.0), 5.0, &white());

        let output = canvas.finish();
        assert_eq!(output.layer_len(RenderLayer::Planets), 1);
        assert_eq!(output.layer_len(RenderLayer::Background), 0);
    }

    #[test]
    fn test_degenerate_primitives_are_skipped() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.fill_circle(Point::default(), 0.0, &white());
        canvas.fill_circle(Point::default(), -3.0, &white());
        canvas.fill_circle(Point::default(), f32::NAN, &white());
        canvas.fill_ellipse(Point::default(), 5.0, 0.0, &white());
        canvas.fill_rect(Point::default(), Size::new(0.0, 5.0), &white());

        assert!(canvas.finish().is_empty());
    }

    #[test]
    fn test_solid_paint_sets_opacity() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.fill_circle(Point::new(1.0, 1.0), 1.0, &white());

        let svg = rendered(canvas);
        assert!(svg.contains("fill-opacity=\"0.5\""));
    }

    #[test]
    fn test_gradient_paint_registers_unique_definitions() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0)).with_id_prefix("f0-");
        let gradient = Paint::from(
            Gradient::radial(Point::new(5.0, 5.0), 0.0, 5.0)
                .with_stop(0.0, Color::rgba(0, 0, 0, 1.0)),
        );
        canvas.fill_circle(Point::new(5.0, 5.0), 5.0, &gradient);
        canvas.fill_circle(Point::new(5.0, 5.0), 5.0, &gradient);

        let mut output = canvas.finish();
        let definitions: Vec<String> = output
            .take_definitions()
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert_eq!(definitions.len(), 2);
        assert!(definitions[0].contains("id=\"f0-g0\""));
        assert!(definitions[1].contains("id=\"f0-g1\""));

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("url(#f0-g0)"));
        assert!(svg.contains("url(#f0-g1)"));
    }

    #[test]
    fn test_stroke_arc_flags() {
        let stroke = StrokeDefinition::solid(Color::rgba(5, 5, 15, 0.8), 4.0);

        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.stroke_arc(Point::new(50.0, 50.0), 10.0, 0.0, PI * 1.2, &stroke);
        let svg = rendered(canvas);
        assert!(svg.contains("A 10 10 0 1 1"));

        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.stroke_arc(Point::new(50.0, 50.0), 10.0, 0.0, PI / 2.0, &stroke);
        let svg = rendered(canvas);
        assert!(svg.contains("A 10 10 0 0 1"));
    }

    #[test]
    fn test_full_turn_arc_becomes_circle() {
        let stroke = StrokeDefinition::default();
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.stroke_arc(Point::new(50.0, 50.0), 10.0, 0.0, TAU, &stroke);

        let svg = rendered(canvas);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_with_group_wraps_children() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.set_layer(RenderLayer::BlackHole);
        let transform = Transform::identity().translate(Point::new(10.0, 10.0));
        canvas.with_group(&transform, 0.7, |canvas| {
            canvas.fill_circle(Point::default(), 3.0, &white());
            canvas.fill_circle(Point::default(), 2.0, &white());
        });

        let output = canvas.finish();
        assert_eq!(output.layer_len(RenderLayer::BlackHole), 1);

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("transform=\"translate(10 10)\""));
        assert!(svg.contains("opacity=\"0.7\""));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_empty_group_is_dropped() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.with_group(&Transform::identity(), 1.0, |_| {});
        assert!(canvas.finish().is_empty());
    }

    #[test]
    fn test_with_link() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        canvas.set_layer(RenderLayer::Overlay);
        canvas.with_link("https://example.com", |canvas| {
            canvas.fill_text(
                Point::new(50.0, 50.0),
                "Discord",
                &FontSpec::default(),
                TextAnchor::Middle,
                &white(),
            );
        });

        let svg = rendered(canvas);
        assert!(svg.contains("href=\"https://example.com\""));
        assert!(svg.contains("target=\"_blank\""));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("Discord"));
    }
}
