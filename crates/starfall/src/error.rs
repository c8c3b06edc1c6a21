//! Error types for Starfall operations.
//!
//! This module provides the main error type [`StarfallError`] which wraps
//! the error conditions that can occur while building, animating and
//! exporting a scene.

use std::io;

use thiserror::Error;

/// The main error type for Starfall operations.
#[derive(Debug, Error)]
pub enum StarfallError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The drawing surface has no area; nothing can be generated or painted.
    #[error("Viewport error: {0}")]
    Viewport(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for StarfallError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
