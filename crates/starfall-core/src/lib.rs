//! Starfall Core Types and Definitions
//!
//! This crate provides the foundational drawing types for Starfall scenes.
//! It includes:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Paints, gradients, strokes, transforms and the layered
//!   immediate-mode [`draw::Canvas`] that records SVG output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
