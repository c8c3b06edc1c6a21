//! Frame timing and the animation driver.
//!
//! [`Animation`] owns a [`Scene`], the RNG that feeds it and a
//! [`FrameClock`]. Each [`Animation::tick`] turns an absolute timestamp into
//! a frame delta, advances the scene and paints a [`Frame`].

use std::time::Duration;

use log::{info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use starfall_core::geometry::Size;

use crate::{
    StarfallError,
    config::{AppConfig, PageConfig, SceneConfig},
    render::{self, Frame},
    scene::{Scene, SceneId, Viewport},
};

/// Converts absolute timestamps into deltas between consecutive ticks.
///
/// The first tick has a zero delta.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use starfall::animation::FrameClock;
/// let mut clock = FrameClock::default();
/// assert_eq!(clock.tick(Duration::from_millis(500)), Duration::ZERO);
/// assert_eq!(clock.tick(Duration::from_millis(516)), Duration::from_millis(16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Duration>,
}

impl FrameClock {
    /// Records `timestamp` and returns the time since the previous tick.
    ///
    /// A timestamp earlier than the previous one yields a zero delta.
    pub fn tick(&mut self, timestamp: Duration) -> Duration {
        let delta = self
            .last
            .map_or(Duration::ZERO, |last| timestamp.saturating_sub(last));
        self.last = Some(timestamp);
        delta
    }

    /// Forgets the previous timestamp.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// A running backdrop animation.
#[derive(Debug, Clone)]
pub struct Animation {
    scene: Scene,
    scene_config: SceneConfig,
    page: PageConfig,
    rng: StdRng,
    clock: FrameClock,
    frame_index: usize,
}

impl Animation {
    /// Builds the scene described by `config`.
    ///
    /// A configured seed makes the animation fully reproducible; otherwise a
    /// fresh seed is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`StarfallError::Viewport`] when the configured viewport has
    /// no area.
    pub fn new(config: &AppConfig) -> Result<Self, StarfallError> {
        let scene_config = config.scene().clone();
        let seed = scene_config.seed().unwrap_or_else(|| rand::rng().random());
        let viewport = Viewport::new(scene_config.viewport())?;

        let id = SceneId::from_seed(seed);
        info!(seed, scene_id = id.as_str(); "Starting animation");

        let mut rng = StdRng::seed_from_u64(seed);
        let scene = Scene::generate(id, viewport, &scene_config, &mut rng);

        Ok(Self {
            scene,
            scene_config,
            page: config.page().clone(),
            rng,
            clock: FrameClock::default(),
            frame_index: 0,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Advances to `timestamp` and paints the next frame.
    pub fn tick(&mut self, timestamp: Duration) -> Frame {
        let delta = self.clock.tick(timestamp);
        let dt = delta.as_secs_f32() * 1000.0;
        trace!(frame = self.frame_index, dt; "Advancing scene");

        self.scene.advance(dt, &mut self.rng);
        let frame = render::paint_frame(&self.scene, &self.page, &mut self.rng, self.frame_index);
        self.frame_index += 1;
        frame
    }

    /// Rebuilds the scene for a new surface size.
    ///
    /// # Errors
    ///
    /// Returns [`StarfallError::Viewport`] for a size with no area; the
    /// current scene is kept and no frame should be painted.
    pub fn resize(&mut self, size: Size) -> Result<(), StarfallError> {
        let viewport = Viewport::new(size)?;
        self.scene_config.set_viewport(size);
        self.scene
            .resize(viewport, &self.scene_config, &mut self.rng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;

    fn seeded_config(seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.scene_mut().set_seed(Some(seed));
        config
    }

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(Duration::from_secs(3)), Duration::ZERO);
        assert_eq!(clock.tick(Duration::from_millis(3050)), Duration::from_millis(50));

        clock.reset();
        assert_eq!(clock.tick(Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn test_clock_ignores_backwards_time() {
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_millis(100));
        assert_eq!(clock.tick(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_seeded_animation_is_reproducible() {
        let config = seeded_config(2024);
        let mut a = Animation::new(&config).expect("animation");
        let mut b = Animation::new(&config).expect("animation");

        for i in 0..3 {
            let t = Duration::from_millis(i * 16);
            assert_eq!(a.tick(t).to_svg_string(), b.tick(t).to_svg_string());
        }
    }

    #[test]
    fn test_tick_numbers_frames() {
        let mut animation = Animation::new(&seeded_config(1)).expect("animation");
        assert_eq!(animation.tick(Duration::ZERO).index(), 0);
        assert_eq!(animation.tick(Duration::from_millis(16)).index(), 1);
    }

    #[test]
    fn test_empty_viewport_is_rejected() {
        let mut config = seeded_config(1);
        config.scene_mut().set_viewport(Size::new(0.0, 0.0));
        assert!(matches!(
            Animation::new(&config),
            Err(StarfallError::Viewport(_))
        ));
    }

    #[test]
    fn test_resize_rejects_empty_and_keeps_scene() {
        let config = AppConfig::new(
            SceneConfig::default(),
            AnimationConfig::default(),
            PageConfig::disabled(),
        );
        let mut animation = Animation::new(&config).expect("animation");
        let before = animation.scene().viewport();

        assert!(animation.resize(Size::new(100.0, 0.0)).is_err());
        assert_eq!(animation.scene().viewport(), before);

        animation
            .resize(Size::new(640.0, 480.0))
            .expect("valid resize");
        assert_eq!(animation.scene().viewport().width(), 640.0);
    }
}
