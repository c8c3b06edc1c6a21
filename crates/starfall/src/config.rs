//! Configuration types for Starfall scenes.
//!
//! This module provides configuration structures that control how scenes are
//! generated, animated and overlaid with page content. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field has
//! a default, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`SceneConfig`] - Viewport, seed and object counts.
//! - [`AnimationConfig`] - Frame interval and number of frames to render.
//! - [`PageConfig`] - Title and link buttons painted over the backdrop.
//!
//! # Example
//!
//! ```
//! # use starfall::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.scene().star_count().min(), 350);
//! ```

use rand::Rng;
use serde::Deserialize;

use starfall_core::geometry::Size;

use crate::StarfallError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scene generation section.
    #[serde(default)]
    scene: SceneConfig,

    /// Animation section.
    #[serde(default)]
    animation: AnimationConfig,

    /// Page overlay section.
    #[serde(default)]
    page: PageConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(scene: SceneConfig, animation: AnimationConfig, page: PageConfig) -> Self {
        Self {
            scene,
            animation,
            page,
        }
    }

    /// Returns the scene configuration.
    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    /// Returns the scene configuration for in-place overrides.
    pub fn scene_mut(&mut self) -> &mut SceneConfig {
        &mut self.scene
    }

    /// Returns the animation configuration.
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Returns the animation configuration for in-place overrides.
    pub fn animation_mut(&mut self) -> &mut AnimationConfig {
        &mut self.animation
    }

    /// Returns the page overlay configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Returns the page overlay configuration for in-place overrides.
    pub fn page_mut(&mut self) -> &mut PageConfig {
        &mut self.page
    }

    /// Checks every section for values that cannot produce a scene.
    ///
    /// # Errors
    ///
    /// Returns [`StarfallError::Config`] naming the first offending field,
    /// or [`StarfallError::Viewport`] for an empty viewport.
    pub fn validate(&self) -> Result<(), StarfallError> {
        self.scene.validate()?;
        self.animation.validate()?;
        self.page.validate()
    }
}

/// An inclusive range of object counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountRange {
    min: usize,
    max: usize,
}

impl CountRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn min(self) -> usize {
        self.min
    }

    pub fn max(self) -> usize {
        self.max
    }

    /// Draws a count uniformly from `min..=max`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    fn validate(self, field: &str) -> Result<(), StarfallError> {
        if self.min > self.max {
            return Err(StarfallError::Config(format!(
                "`{field}` has min {} greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Scene generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Surface the scene is generated for.
    viewport: Size,
    /// Fixed seed; `None` draws a fresh one per scene.
    seed: Option<u64>,
    /// Number of background stars.
    star_count: CountRange,
    /// Number of planets attempted (placement may drop some).
    planet_count: CountRange,
    /// Number of constellations attempted (placement may drop some).
    constellation_count: CountRange,
    /// Whether constellation names are painted.
    show_constellation_names: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 800.0),
            seed: None,
            star_count: CountRange::new(350, 449),
            planet_count: CountRange::new(5, 8),
            constellation_count: CountRange::new(4, 7),
            show_constellation_names: true,
        }
    }
}

impl SceneConfig {
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn star_count(&self) -> CountRange {
        self.star_count
    }

    pub fn planet_count(&self) -> CountRange {
        self.planet_count
    }

    pub fn constellation_count(&self) -> CountRange {
        self.constellation_count
    }

    pub fn set_constellation_count(&mut self, count: CountRange) {
        self.constellation_count = count;
    }

    pub fn show_constellation_names(&self) -> bool {
        self.show_constellation_names
    }

    fn validate(&self) -> Result<(), StarfallError> {
        if self.viewport.is_empty() {
            return Err(StarfallError::Viewport(format!(
                "viewport {}x{} has no drawable area",
                self.viewport.width(),
                self.viewport.height()
            )));
        }
        self.star_count.validate("scene.star_count")?;
        self.planet_count.validate("scene.planet_count")?;
        self.constellation_count
            .validate("scene.constellation_count")
    }
}

/// Frame timing settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time between rendered frames in milliseconds.
    frame_interval_ms: f32,
    /// Number of frames to render.
    frames: usize,
}

/// Longest allowed gap between two frames, one minute.
pub const MAX_FRAME_INTERVAL_MS: f32 = 60_000.0;
/// Most frames a single run may render.
pub const MAX_FRAMES: usize = 100_000;

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 1000.0 / 60.0,
            frames: 1,
        }
    }
}

impl AnimationConfig {
    pub fn new(frame_interval_ms: f32, frames: usize) -> Self {
        Self {
            frame_interval_ms,
            frames,
        }
    }

    pub fn frame_interval_ms(&self) -> f32 {
        self.frame_interval_ms
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn set_frames(&mut self, frames: usize) {
        self.frames = frames;
    }

    fn validate(&self) -> Result<(), StarfallError> {
        if !(self.frame_interval_ms > 0.0 && self.frame_interval_ms <= MAX_FRAME_INTERVAL_MS) {
            return Err(StarfallError::Config(format!(
                "`animation.frame_interval_ms` must be in (0, {MAX_FRAME_INTERVAL_MS}], got {}",
                self.frame_interval_ms
            )));
        }
        if !(1..=MAX_FRAMES).contains(&self.frames) {
            return Err(StarfallError::Config(format!(
                "`animation.frames` must be between 1 and {MAX_FRAMES}, got {}",
                self.frames
            )));
        }
        Ok(())
    }
}

/// Accent used for a link button's gradient fill and border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAccent {
    #[default]
    Blue,
    Fuchsia,
    Pink,
    Cyan,
}

/// One call-to-action button of the page overlay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkButton {
    label: String,
    href: String,
    #[serde(default)]
    accent: ButtonAccent,
}

impl LinkButton {
    pub fn new(label: impl Into<String>, href: impl Into<String>, accent: ButtonAccent) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            accent,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn accent(&self) -> ButtonAccent {
        self.accent
    }
}

/// Page content painted above the backdrop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    enabled: bool,
    title: String,
    links: Vec<LinkButton>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "FALLEN FURS".to_string(),
            links: vec![
                LinkButton::new(
                    "Our VRC Group!",
                    "https://vrchat.com/home/group/grp_2c51f675-5c99-4da9-a6f7-2cfb5440bbac",
                    ButtonAccent::Blue,
                ),
                LinkButton::new(
                    "Discord",
                    "https://discord.com/invite/x6SVAjEtD4",
                    ButtonAccent::Blue,
                ),
                LinkButton::new(
                    "Tiktok",
                    "https://www.tiktok.com/@fallenfurs",
                    ButtonAccent::Fuchsia,
                ),
                LinkButton::new(
                    "Instagram",
                    "https://instagram.com/fallenfurs",
                    ButtonAccent::Pink,
                ),
                LinkButton::new("Follow Us On X", "https://x.com/FallenFurs", ButtonAccent::Cyan),
            ],
        }
    }
}

impl PageConfig {
    pub fn new(enabled: bool, title: impl Into<String>, links: Vec<LinkButton>) -> Self {
        Self {
            enabled,
            title: title.into(),
            links,
        }
    }

    /// A configuration that paints no overlay at all.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn links(&self) -> &[LinkButton] {
        &self.links
    }

    fn validate(&self) -> Result<(), StarfallError> {
        if let Some(link) = self.links.iter().find(|link| link.href.trim().is_empty()) {
            return Err(StarfallError::Config(format!(
                "link button `{}` has an empty `href`",
                link.label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scene().planet_count(), CountRange::new(5, 8));
        assert_eq!(config.scene().constellation_count(), CountRange::new(4, 7));
        assert!(config.scene().seed().is_none());
        assert_eq!(config.animation().frames(), 1);
        assert_eq!(config.page().links().len(), 5);
        assert_eq!(config.page().title(), "FALLEN FURS");
    }

    #[test]
    fn test_inverted_count_range_is_rejected() {
        let mut config = AppConfig::default();
        config
            .scene_mut()
            .set_constellation_count(CountRange::new(9, 2));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, StarfallError::Config(_)));
        assert!(err.to_string().contains("scene.constellation_count"));
    }

    #[test]
    fn test_empty_viewport_is_rejected() {
        let mut config = AppConfig::default();
        config.scene_mut().set_viewport(Size::new(0.0, 600.0));

        assert!(matches!(
            config.validate(),
            Err(StarfallError::Viewport(_))
        ));
    }

    #[test]
    fn test_zero_frames_is_rejected() {
        let mut config = AppConfig::default();
        config.animation_mut().set_frames(0);
        assert!(matches!(config.validate(), Err(StarfallError::Config(_))));
    }

    #[test]
    fn test_out_of_range_animation_is_rejected() {
        for animation in [
            AnimationConfig::new(1.0e30, 2),
            AnimationConfig::new(f32::INFINITY, 2),
            AnimationConfig::new(f32::NAN, 2),
            AnimationConfig::new(-16.0, 2),
            AnimationConfig::new(16.0, MAX_FRAMES + 1),
        ] {
            let config = AppConfig::new(SceneConfig::default(), animation, PageConfig::default());
            assert!(matches!(config.validate(), Err(StarfallError::Config(_))));
        }

        let edge = AnimationConfig::new(MAX_FRAME_INTERVAL_MS, MAX_FRAMES);
        let config = AppConfig::new(SceneConfig::default(), edge, PageConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_href_is_rejected() {
        let page = PageConfig::new(true, "T", vec![LinkButton::new("A", " ", ButtonAccent::Pink)]);
        let config = AppConfig::new(SceneConfig::default(), AnimationConfig::default(), page);
        assert!(matches!(config.validate(), Err(StarfallError::Config(_))));
    }

    #[test]
    fn test_count_range_sample_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = CountRange::new(4, 7);
        for _ in 0..200 {
            let n = range.sample(&mut rng);
            assert!((4..=7).contains(&n));
        }
        assert_eq!(CountRange::new(3, 3).sample(&mut rng), 3);
    }
}
