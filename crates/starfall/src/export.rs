//! Writing painted frames out.
//!
//! A [`Frame`] already holds a finished document; an [`Exporter`] only
//! decides where each one goes. [`svg::Svg`] is the one backend: a single
//! file, or a numbered file per frame.
//!
//! Failures are [`Error`], surfaced to callers as
//! [`StarfallError::Export`](crate::StarfallError::Export).

pub mod svg;

use crate::render::Frame;

/// Destination for a sequence of frames.
pub trait Exporter {
    /// Stores `frame`; frames arrive in index order.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the destination cannot be written.
    fn export_frame(&mut self, frame: &Frame) -> Result<(), Error>;
}

#[derive(Debug)]
pub enum Error {
    /// The destination itself is unusable, e.g. a path without a file name
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "cannot export: {msg}"),
            Self::Io(err) => write!(f, "failed to write frame: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
