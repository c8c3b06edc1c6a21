//! Drawing primitives for rendering scenes to SVG.
//!
//! Scenes are painted the way a 2D canvas is: a sequence of immediate-mode
//! calls on a [`Canvas`], each filling or stroking one primitive with a
//! [`Paint`]. The canvas records every call as an SVG node on the current
//! [`RenderLayer`], and [`LayeredOutput`] emits the layers bottom to top.

mod canvas;
mod layer;
mod paint;
mod stroke;
mod transform;

pub use canvas::{Canvas, FontSpec, TextAnchor};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use paint::{Gradient, GradientKind, GradientStop, Paint};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use transform::Transform;
