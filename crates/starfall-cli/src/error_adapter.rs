//! Error adapter for converting StarfallError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use starfall::StarfallError;

/// Adapter giving a [`StarfallError`] a diagnostic code and, where one
/// applies, a hint on how to fix it.
pub struct ErrorAdapter<'a>(pub &'a StarfallError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StarfallError::Io(_) => "starfall::io",
            StarfallError::Config(_) => "starfall::config",
            StarfallError::Viewport(_) => "starfall::viewport",
            StarfallError::Export(_) => "starfall::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StarfallError::Viewport(_) => "pass a positive --width and --height",
            StarfallError::Config(_) => "check the configuration file passed with --config",
            StarfallError::Io(_) | StarfallError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_variant() {
        let err = StarfallError::Viewport("viewport 0x0 has no drawable area".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.code().map(|c| c.to_string()).as_deref(),
            Some("starfall::viewport")
        );
        assert!(adapter.help().is_some());
        assert_eq!(
            adapter.to_string(),
            "Viewport error: viewport 0x0 has no drawable area"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = StarfallError::Io(std::io::Error::other("disk full"));
        let adapter = ErrorAdapter(&err);

        assert!(adapter.help().is_none());
        assert!(std::error::Error::source(&adapter).is_some());
    }

    #[test]
    fn test_report_renders_code() {
        let err = StarfallError::Config("`animation.frames` must be at least 1".to_string());
        let mut writer = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut writer, &ErrorAdapter(&err))
            .expect("Writing to String buffer is infallible");

        assert!(writer.contains("starfall::config"));
        assert!(writer.contains("animation.frames"));
    }
}
