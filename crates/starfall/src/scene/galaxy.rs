//! The spiral galaxy with its central black hole and a sun on one arm.

use log::{debug, trace};
use rand::Rng;

use starfall_core::{
    color::Color,
    geometry::{Point, Size},
};

use super::random::{random_angle, uniform};

/// Center draws before falling back to a corner quadrant.
const CENTER_ATTEMPTS: usize = 100;

/// Colors of one galaxy theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyTheme {
    /// Inner and outer stop of the core glow.
    core: [Color; 2],
    /// Inner, middle and outer stop of the accretion disk.
    disk: [Color; 3],
}

impl GalaxyTheme {
    pub fn core(&self) -> [Color; 2] {
        self.core
    }

    pub fn disk(&self) -> [Color; 3] {
        self.disk
    }

    fn by_index(index: usize) -> Self {
        let c = Color::rgba;
        match index {
            // blue/white
            0 => Self {
                core: [c(255, 255, 255, 0.5), c(100, 150, 200, 0.0)],
                disk: [
                    c(150, 200, 255, 0.8),
                    c(100, 150, 200, 0.6),
                    c(50, 100, 150, 0.4),
                ],
            },
            // red/orange
            1 => Self {
                core: [c(255, 240, 220, 0.5), c(200, 160, 120, 0.0)],
                disk: [
                    c(255, 100, 50, 0.8),
                    c(255, 150, 50, 0.6),
                    c(200, 100, 50, 0.4),
                ],
            },
            // purple/pink
            2 => Self {
                core: [c(255, 240, 255, 0.5), c(200, 160, 220, 0.0)],
                disk: [
                    c(200, 100, 255, 0.8),
                    c(180, 100, 220, 0.6),
                    c(150, 80, 180, 0.4),
                ],
            },
            // green/teal
            3 => Self {
                core: [c(240, 255, 240, 0.5), c(160, 200, 180, 0.0)],
                disk: [
                    c(100, 220, 180, 0.8),
                    c(80, 200, 160, 0.6),
                    c(60, 180, 140, 0.4),
                ],
            },
            // classic yellow/blue
            _ => Self {
                core: [c(255, 240, 220, 0.5), c(200, 160, 120, 0.0)],
                disk: [
                    c(255, 100, 50, 0.9),
                    c(255, 150, 50, 0.7),
                    c(200, 100, 50, 0.5),
                ],
            },
        }
    }
}

/// A rotating spiral galaxy.
///
/// The black hole sits at the galaxy center; the sun is fixed on the disc
/// and does not rotate with the arms.
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    center: Point,
    radius: f32,
    rotation: f32,
    rotation_speed: f32,
    theme: GalaxyTheme,
    black_hole_radius: f32,
    sun: Point,
    sun_radius: f32,
}

impl Galaxy {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn theme(&self) -> &GalaxyTheme {
        &self.theme
    }

    pub fn black_hole_radius(&self) -> f32 {
        self.black_hole_radius
    }

    pub fn sun(&self) -> Point {
        self.sun
    }

    pub fn sun_radius(&self) -> f32 {
        self.sun_radius
    }

    /// Rotates the galaxy by `dt` milliseconds worth of its speed.
    pub fn advance(&mut self, dt: f32) {
        self.rotation += self.rotation_speed * dt;
    }
}

fn in_exclusion_box(point: Point, viewport: Size, avoidance: f32) -> bool {
    let center = viewport.center();
    (point.x() - center.x()).abs() < avoidance && (point.y() - center.y()).abs() < avoidance
}

/// Picks a galaxy center outside the central exclusion box.
fn place_center<R: Rng + ?Sized>(rng: &mut R, viewport: Size) -> Point {
    let width = viewport.width();
    let height = viewport.height();
    let avoidance = viewport.min_side() * 0.3;

    let sampled = (0..CENTER_ATTEMPTS).find_map(|_| {
        let candidate = Point::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height));
        (!in_exclusion_box(candidate, viewport, avoidance)).then_some(candidate)
    });
    if let Some(center) = sampled {
        return center;
    }

    trace!(attempts = CENTER_ATTEMPTS; "Galaxy center falls back to a corner quadrant");
    let mid = viewport.center();
    let x = if rng.random_bool(0.5) {
        uniform(rng, 0.0, mid.x() - avoidance)
    } else {
        uniform(rng, mid.x() + avoidance, width)
    };
    let y = if rng.random_bool(0.5) {
        uniform(rng, 0.0, mid.y() - avoidance)
    } else {
        uniform(rng, mid.y() + avoidance, height)
    };
    Point::new(x, y)
}

/// Generates the galaxy of a scene.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Size) -> Galaxy {
    let min_side = viewport.min_side();
    let center = place_center(rng, viewport);
    let theme = GalaxyTheme::by_index(rng.random_range(0..5));

    let sun_angle = random_angle(rng);
    let sun_distance = min_side * uniform(rng, 0.1, 0.2);
    let sun = Point::from_polar(center, sun_angle, sun_distance);

    let galaxy = Galaxy {
        center,
        radius: min_side * uniform(rng, 0.25, 0.35),
        rotation: random_angle(rng),
        rotation_speed: uniform(rng, 0.00003, 0.00007),
        theme,
        black_hole_radius: uniform(rng, 6.0, 10.0),
        sun,
        sun_radius: uniform(rng, 10.0, 14.0),
    };
    debug!(center:? = galaxy.center, radius = galaxy.radius; "Galaxy generated");
    galaxy
}
