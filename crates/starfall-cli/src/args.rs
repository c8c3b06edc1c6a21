//! Command-line argument definitions for the Starfall CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the output path and configuration file,
//! override individual scene settings and control logging verbosity.

use clap::Parser;

/// Command-line arguments for the Starfall backdrop renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file; several frames are numbered next to it
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Viewport width, overriding the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Viewport height, overriding the configuration
    #[arg(long)]
    pub height: Option<f32>,

    /// Seed for a reproducible scene
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames to render
    #[arg(long)]
    pub frames: Option<usize>,

    /// Render the backdrop without the page title and buttons
    #[arg(long)]
    pub no_page: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
