//! Procedural scene generation and per-frame updates.
//!
//! A [`Scene`] holds every object of the backdrop: starfield, galaxy,
//! constellations, planets, satellite, shooting stars and the black hole
//! below the page buttons. All randomness comes from the caller's RNG, so a
//! seeded generator reproduces a scene exactly.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use starfall::{
//!     config::SceneConfig,
//!     geometry::Size,
//!     scene::{Scene, SceneId, Viewport},
//! };
//!
//! let viewport = Viewport::new(Size::new(1280.0, 800.0)).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut scene = Scene::generate(SceneId::from_seed(7), viewport, &SceneConfig::default(), &mut rng);
//!
//! scene.advance(16.0, &mut rng);
//! assert!(!scene.stars().is_empty());
//! ```

pub mod black_hole;
pub mod constellations;
pub mod galaxy;
pub mod planets;
pub mod random;
pub mod satellite;
pub mod shooting_star;
pub mod stars;

mod scene_id;

pub use scene_id::SceneId;

use log::{debug, info, trace};
use rand::Rng;

use starfall_core::{
    color::Color,
    geometry::{Point, Size},
};

use crate::{StarfallError, config::SceneConfig};

use black_hole::CenterBlackHole;
use constellations::Constellation;
use galaxy::Galaxy;
use planets::Planet;
use satellite::Satellite;
use shooting_star::{SPAWN_BASE_MS, SPAWN_JITTER_MS, ShootingStar};
use stars::Star;

/// A drawing surface with a non-empty area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport(Size);

impl Viewport {
    /// Wraps `size`, rejecting surfaces with no area.
    ///
    /// # Errors
    ///
    /// Returns [`StarfallError::Viewport`] when either side is not positive.
    pub fn new(size: Size) -> Result<Self, StarfallError> {
        if size.is_empty() {
            return Err(StarfallError::Viewport(format!(
                "viewport {}x{} has no drawable area",
                size.width(),
                size.height()
            )));
        }
        Ok(Self(size))
    }

    pub fn size(self) -> Size {
        self.0
    }

    pub fn width(self) -> f32 {
        self.0.width()
    }

    pub fn height(self) -> f32 {
        self.0.height()
    }
}

/// Corner-to-corner background gradient stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundTheme {
    stops: [Color; 3],
}

impl BackgroundTheme {
    pub fn by_index(index: usize) -> Self {
        let c = |r, g, b| Color::rgba(r, g, b, 1.0);
        let stops = match index {
            // deep blue/purple
            0 => [c(10, 5, 30), c(20, 10, 50), c(5, 15, 40)],
            // dark red/purple
            1 => [c(20, 5, 20), c(30, 10, 30), c(20, 5, 25)],
            // dark green/blue
            2 => [c(5, 15, 20), c(10, 20, 30), c(5, 10, 25)],
            // dark teal/blue
            3 => [c(5, 15, 25), c(10, 25, 35), c(5, 20, 30)],
            // classic dark blue
            _ => [c(10, 5, 20), c(20, 10, 40), c(5, 10, 30)],
        };
        Self { stops }
    }

    /// Stops at offsets 0, 0.5 and 1.
    pub fn stops(&self) -> [Color; 3] {
        self.stops
    }
}

/// Every object of the backdrop.
#[derive(Debug, Clone)]
pub struct Scene {
    id: SceneId,
    viewport: Viewport,
    background: BackgroundTheme,
    show_constellation_names: bool,
    stars: Vec<Star>,
    planets: Vec<Planet>,
    galaxy: Galaxy,
    constellations: Vec<Constellation>,
    black_hole: CenterBlackHole,
    satellite: Satellite,
    shooting_stars: Vec<ShootingStar>,
    /// Milliseconds since the last shooting-star spawn.
    spawn_timer: f32,
}

impl Scene {
    /// Generates a complete scene for `viewport`.
    pub fn generate<R: Rng + ?Sized>(
        id: SceneId,
        viewport: Viewport,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Self {
        info!(scene_id = id.as_str(), width = viewport.width(), height = viewport.height(); "Generating scene");
        let size = viewport.size();

        // Order matters: the satellite looks for its host among the planets.
        let stars = stars::generate(rng, size, config.star_count());
        let planets = planets::generate(rng, size, config.planet_count());
        let galaxy = galaxy::generate(rng, size);
        let constellations = constellations::generate(rng, size, config.constellation_count());
        let black_hole = black_hole::generate(rng, size);
        let satellite = satellite::generate(rng, size, &planets);

        let scene = Self {
            background: BackgroundTheme::by_index(id.background_theme()),
            id,
            viewport,
            show_constellation_names: config.show_constellation_names(),
            stars,
            planets,
            galaxy,
            constellations,
            black_hole,
            satellite,
            shooting_stars: Vec::new(),
            spawn_timer: 0.0,
        };
        debug!(
            stars = scene.stars.len(),
            planets = scene.planets.len(),
            constellations = scene.constellations.len();
            "Scene generated"
        );
        scene
    }

    /// Rebuilds every object for a new viewport. The scene id, and with it
    /// the background theme, is kept.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, config: &SceneConfig, rng: &mut R) {
        info!(width = viewport.width(), height = viewport.height(); "Resizing scene");
        *self = Self::generate(self.id.clone(), viewport, config, rng);
    }

    /// Advances all motion by `dt` milliseconds.
    ///
    /// Spawns a shooting star once the spawn timer passes a threshold
    /// re-rolled on every call, and drops finished shooting stars.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.galaxy.advance(dt);
        self.black_hole.advance(dt);
        for star in &mut self.stars {
            star.twinkle(dt);
        }
        for planet in &mut self.planets {
            planet.advance(dt);
        }
        self.satellite.advance(dt);

        self.spawn_timer += dt;
        let threshold = SPAWN_BASE_MS + rng.random::<f32>() * SPAWN_JITTER_MS;
        if self.spawn_timer > threshold {
            self.shooting_stars
                .push(ShootingStar::spawn(rng, self.viewport.size()));
            self.spawn_timer = 0.0;
            trace!(active = self.shooting_stars.len(); "Shooting star spawned");
        }

        for star in &mut self.shooting_stars {
            star.advance(dt);
        }
        self.shooting_stars.retain(ShootingStar::is_active);
    }

    pub fn id(&self) -> &SceneId {
        &self.id
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background(&self) -> &BackgroundTheme {
        &self.background
    }

    pub fn show_constellation_names(&self) -> bool {
        self.show_constellation_names
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    pub fn black_hole(&self) -> &CenterBlackHole {
        &self.black_hole
    }

    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    /// Center of the viewport.
    pub fn center(&self) -> Point {
        self.viewport.size().center()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::scene::stars::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

    fn scene(seed: u64) -> (Scene, StdRng) {
        let viewport = Viewport::new(Size::new(1280.0, 800.0)).expect("valid viewport");
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = Scene::generate(
            SceneId::from_seed(seed),
            viewport,
            &SceneConfig::default(),
            &mut rng,
        );
        (scene, rng)
    }

    #[test]
    fn test_viewport_rejects_empty_size() {
        assert!(Viewport::new(Size::new(0.0, 10.0)).is_err());
        assert!(Viewport::new(Size::new(10.0, -1.0)).is_err());
        assert!(Viewport::new(Size::new(f32::NAN, 10.0)).is_err());
        assert!(Viewport::new(Size::new(1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_same_seed_same_scene() {
        let (a, _) = scene(1234);
        let (b, _) = scene(1234);

        assert_eq!(a.id(), b.id());
        assert_eq!(a.stars(), b.stars());
        assert_eq!(a.planets(), b.planets());
        assert_eq!(a.galaxy(), b.galaxy());
        assert_eq!(a.constellations(), b.constellations());
    }

    #[test]
    fn test_background_follows_scene_id() {
        let (scene, _) = scene(77);
        let expected = BackgroundTheme::by_index(scene.id().background_theme());
        assert_eq!(*scene.background(), expected);
    }

    fn advance_until_shooting_star(scene: &mut Scene, rng: &mut StdRng) {
        let mut frames = 0;
        while scene.shooting_stars().is_empty() {
            scene.advance(16.0, rng);
            frames += 1;
            assert!(frames < 200, "no shooting star after {frames} frames");
        }
    }

    #[test]
    fn test_first_shooting_star_after_threshold() {
        let (mut scene, mut rng) = scene(3);
        assert!(scene.shooting_stars().is_empty());

        scene.advance(1400.0, &mut rng);
        assert!(scene.shooting_stars().is_empty());

        advance_until_shooting_star(&mut scene, &mut rng);
        assert_eq!(scene.shooting_stars().len(), 1);
        assert!(scene.shooting_stars()[0].is_active());
    }

    #[test]
    fn test_finished_shooting_stars_are_removed() {
        let (mut scene, mut rng) = scene(4);
        advance_until_shooting_star(&mut scene, &mut rng);

        // The slowest star crosses in 500ms; the next spawn is at least 1500ms away
        for _ in 0..6 {
            scene.advance(100.0, &mut rng);
        }
        assert!(scene.shooting_stars().is_empty());
    }

    #[test]
    fn test_advance_keeps_twinkle_bounds() {
        let (mut scene, mut rng) = scene(5);
        for _ in 0..200 {
            scene.advance(16.0, &mut rng);
        }
        for star in scene.stars() {
            assert!(star.brightness() >= MIN_BRIGHTNESS);
            assert!(star.brightness() <= MAX_BRIGHTNESS);
        }
    }

    #[test]
    fn test_constellation_anchors_do_not_twinkle() {
        let (mut scene, mut rng) = scene(8);
        let before = scene.constellations().to_vec();
        for _ in 0..50 {
            scene.advance(16.0, &mut rng);
        }
        assert_eq!(scene.constellations(), before.as_slice());
    }

    #[test]
    fn test_resize_rebuilds_for_new_viewport() {
        let (mut scene, mut rng) = scene(6);
        let id = scene.id().clone();
        advance_until_shooting_star(&mut scene, &mut rng);

        let smaller = Viewport::new(Size::new(400.0, 300.0)).expect("valid viewport");
        scene.resize(smaller, &SceneConfig::default(), &mut rng);

        assert_eq!(scene.viewport(), smaller);
        assert_eq!(*scene.id(), id);
        assert!(scene.shooting_stars().is_empty());
        let bounds = smaller.size().to_bounds();
        assert!(scene.stars().iter().all(|s| bounds.contains(s.position())));
    }
}
