//! The small black hole sitting below the page's buttons.

use rand::Rng;

use starfall_core::geometry::{Point, Size};

use super::random::{random_angle, uniform};

/// Vertical offset below the viewport center.
const DROP: f32 = 120.0;
const JITTER: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CenterBlackHole {
    center: Point,
    radius: f32,
    rotation: f32,
    rotation_speed: f32,
}

impl CenterBlackHole {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn advance(&mut self, dt: f32) {
        self.rotation += self.rotation_speed * dt;
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Size) -> CenterBlackHole {
    let mid = viewport.center();
    let x = mid.x() + uniform(rng, -JITTER, JITTER);
    let y = mid.y() + DROP + uniform(rng, -JITTER, JITTER);

    CenterBlackHole {
        center: Point::new(x, y),
        radius: uniform(rng, 12.0, 18.0),
        rotation: random_angle(rng),
        rotation_speed: uniform(rng, 0.00005, 0.00011),
    }
}
