//! An artificial satellite orbiting the first Earth-like planet.

use log::debug;
use rand::Rng;

use starfall_core::geometry::{Point, Size};

use super::{
    planets::{Planet, PlanetKind},
    random::{random_angle, uniform},
};

/// Planet radius assumed when no Earth-like planet exists.
const NOMINAL_PLANET_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    anchor: Point,
    orbit_radius: f32,
    orbit_speed: f32,
    orbit_angle: f32,
    size: f32,
}

impl Satellite {
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn position(&self) -> Point {
        Point::from_polar(self.anchor, self.orbit_angle, self.orbit_radius)
    }

    pub fn advance(&mut self, dt: f32) {
        self.orbit_angle += self.orbit_speed * dt;
    }
}

/// Generates the satellite; must run after the planets are generated.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Size, planets: &[Planet]) -> Satellite {
    // Host chosen by planet kind, not by matching its body color
    let host = planets
        .iter()
        .find(|planet| planet.kind() == PlanetKind::EarthLike);

    let (anchor, planet_radius) = match host {
        Some(planet) => (planet.anchor(), planet.radius()),
        None => {
            let x = viewport.width() * uniform(rng, 0.3, 0.7);
            let y = viewport.height() * uniform(rng, 0.3, 0.7);
            (Point::new(x, y), NOMINAL_PLANET_RADIUS)
        }
    };
    debug!(has_host = host.is_some(); "Satellite placed");

    Satellite {
        anchor,
        orbit_radius: planet_radius * uniform(rng, 2.0, 3.0),
        orbit_speed: uniform(rng, 0.0003, 0.0007),
        orbit_angle: random_angle(rng),
        size: uniform(rng, 3.0, 5.0),
    }
}
