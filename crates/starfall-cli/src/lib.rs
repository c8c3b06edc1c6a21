//! Starfall CLI library
//!
//! This module contains the core CLI logic for the Starfall backdrop renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use log::info;

use starfall::{BackdropBuilder, StarfallError};

/// Run the Starfall CLI application
///
/// Loads the configuration, applies the command-line overrides, renders the
/// configured frames and writes them as SVG files.
///
/// # Errors
///
/// Returns `StarfallError` for:
/// - Configuration loading or validation errors
/// - An empty viewport
/// - File I/O and export errors
pub fn run(args: &Args) -> Result<(), StarfallError> {
    info!(
        output_path = args.output,
        config_path:? = args.config;
        "Rendering backdrop"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(&mut app_config, args);

    let builder = BackdropBuilder::new(app_config);
    let written = builder.export(&args.output)?;

    info!(files = written.len(); "SVG exported successfully");

    Ok(())
}
