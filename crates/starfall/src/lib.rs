//! Starfall - a procedural, animated space backdrop
//!
//! This library generates a randomized scene (twinkling starfield, spiral
//! galaxy with a black hole and a sun, planets with moons and rings,
//! constellations, a satellite and shooting stars), animates it frame by
//! frame and paints every frame as SVG, optionally with a link page laid
//! over it.

pub mod animation;
pub mod config;
pub mod export;
pub mod scene;

mod error;
mod render;

pub use starfall_core::{color, draw, geometry};

pub use error::StarfallError;
pub use render::{Frame, OverlayLayout};

use std::{path::PathBuf, time::Duration};

use log::{debug, info};

use animation::Animation;
use config::AppConfig;
use export::Exporter;

/// Builder for generating and rendering backdrops.
///
/// # Examples
///
/// ```rust,no_run
/// use starfall::{BackdropBuilder, config::AppConfig};
///
/// let mut config = AppConfig::default();
/// config.scene_mut().set_seed(Some(42));
///
/// let builder = BackdropBuilder::new(config);
/// let svg = builder.render_svg()
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = BackdropBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct BackdropBuilder {
    config: AppConfig,
}

impl BackdropBuilder {
    /// Create a new backdrop builder with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use starfall::{BackdropBuilder, config::AppConfig};
    ///
    /// let builder = BackdropBuilder::new(AppConfig::default());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validates the configuration and starts an animation from it.
    ///
    /// # Errors
    ///
    /// Returns [`StarfallError::Config`] or [`StarfallError::Viewport`] for
    /// an invalid configuration.
    pub fn animation(&self) -> Result<Animation, StarfallError> {
        self.config.validate()?;
        Animation::new(&self.config)
    }

    /// Renders the first frame of the backdrop as an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `StarfallError` for an invalid configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use starfall::BackdropBuilder;
    ///
    /// let svg = BackdropBuilder::default().render_svg()
    ///     .expect("Failed to render backdrop");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self) -> Result<String, StarfallError> {
        let mut animation = self.animation()?;
        let frame = animation.tick(Duration::ZERO);
        info!(frame = frame.index(); "SVG rendered successfully");
        Ok(frame.to_svg_string())
    }

    /// Renders every configured frame, one SVG string each.
    ///
    /// Frames are spaced by the configured frame interval.
    ///
    /// # Errors
    ///
    /// Returns `StarfallError` for an invalid configuration.
    pub fn render_frames(&self) -> Result<Vec<String>, StarfallError> {
        let mut rendered = Vec::new();
        self.for_each_frame(|frame| {
            rendered.push(frame.to_svg_string());
            Ok(())
        })?;
        Ok(rendered)
    }

    /// Renders every configured frame and writes them as SVG files.
    ///
    /// A single frame goes to `path` itself; several frames go to numbered
    /// files next to it (`sky.svg` becomes `sky_0000.svg`, `sky_0001.svg`, ...).
    /// Each frame is written as soon as it is painted. Returns the written
    /// paths in frame order.
    ///
    /// # Errors
    ///
    /// Returns `StarfallError` for an invalid configuration or when a file
    /// cannot be written.
    pub fn export(&self, path: impl Into<PathBuf>) -> Result<Vec<PathBuf>, StarfallError> {
        let mut exporter = export::svg::SvgBuilder::new(path)
            .numbered(self.config.animation().frames() > 1)
            .build()?;

        self.for_each_frame(|frame| Ok(exporter.export_frame(&frame)?))?;

        let written = exporter.into_written();
        info!(files = written.len(); "Backdrop exported");
        Ok(written)
    }

    /// Ticks the animation once per configured frame, spaced by the frame
    /// interval, handing each painted frame to `sink`.
    fn for_each_frame(
        &self,
        mut sink: impl FnMut(Frame) -> Result<(), StarfallError>,
    ) -> Result<(), StarfallError> {
        let mut animation = self.animation()?;
        let settings = self.config.animation();
        let interval = Duration::try_from_secs_f32(settings.frame_interval_ms() / 1000.0)
            .map_err(|err| StarfallError::Config(format!("invalid frame interval: {err}")))?;
        info!(frames = settings.frames(), interval_ms = settings.frame_interval_ms(); "Rendering frames");

        for index in 0..settings.frames() {
            let timestamp = u32::try_from(index)
                .ok()
                .and_then(|index| interval.checked_mul(index))
                .ok_or_else(|| {
                    StarfallError::Config(format!("frame {index} lies beyond the representable time"))
                })?;
            sink(animation.tick(timestamp))?;
        }
        debug!(count = settings.frames(); "Frames painted");
        Ok(())
    }
}
