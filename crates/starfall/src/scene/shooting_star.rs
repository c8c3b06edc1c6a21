//! Short-lived shooting stars.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use rand::Rng;

use starfall_core::geometry::{Point, Size};

use super::random::uniform;

/// Minimum milliseconds between spawns; a random extra up to
/// [`SPAWN_JITTER_MS`] is re-rolled every frame.
pub const SPAWN_BASE_MS: f32 = 1500.0;
pub const SPAWN_JITTER_MS: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    start: Point,
    end: Point,
    /// Progress per millisecond.
    speed: f32,
    progress: f32,
    trail_length: f32,
    peak_opacity: f32,
    active: bool,
}

impl ShootingStar {
    /// Spawns a star in the upper half heading diagonally down.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Size) -> Self {
        let width = viewport.width();
        let start = Point::new(
            uniform(rng, 0.0, width),
            uniform(rng, 0.0, viewport.height() * 0.5),
        );
        let angle = FRAC_PI_4 + uniform(rng, 0.0, FRAC_PI_2);
        let distance = width * uniform(rng, 0.2, 0.5);
        let end = Point::from_polar(start, angle, distance);

        Self {
            start,
            end,
            speed: uniform(rng, 0.002, 0.005),
            progress: 0.0,
            trail_length: uniform(rng, 50.0, 100.0),
            peak_opacity: uniform(rng, 0.5, 1.0),
            active: true,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current head of the star.
    pub fn head(&self) -> Point {
        self.start.lerp(self.end, self.progress)
    }

    /// Far end of the trail, behind the head along the travel direction.
    pub fn tail(&self) -> Point {
        let travel = self.end.sub_point(self.start);
        let reach = self.progress.min(self.trail_length / 100.0);
        self.head().sub_point(travel.scale(reach))
    }

    /// Trail opacity: fades linearly from the peak as the star travels.
    pub fn opacity(&self) -> f32 {
        self.peak_opacity * (1.0 - self.progress)
    }

    /// Moves the star; reaching the end deactivates it.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.progress += self.speed * dt;
        if self.progress >= 1.0 {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_spawn_ranges() {
        let viewport = Size::new(1000.0, 600.0);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let star = ShootingStar::spawn(&mut rng, viewport);
            assert!(star.start().y() <= 300.0);
            // Heading down
            assert!(star.end().y() > star.start().y());
            let travel = star.end().distance(star.start());
            assert!((200.0 - 1e-2..=500.0 + 1e-2).contains(&travel));
            assert!(star.is_active());
            assert_approx_eq!(f32, star.progress(), 0.0);
        }
    }

    #[test]
    fn test_advance_deactivates_at_end() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut star = ShootingStar::spawn(&mut rng, Size::new(800.0, 600.0));

        star.advance(100.0);
        assert!(star.is_active());
        assert!(star.opacity() < star.peak_opacity);

        star.advance(1000.0);
        assert!(!star.is_active());
    }

    #[test]
    fn test_tail_trails_head() {
        let mut star = ShootingStar {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 100.0),
            speed: 0.001,
            progress: 0.0,
            trail_length: 50.0,
            peak_opacity: 1.0,
            active: true,
        };
        star.advance(200.0);
        assert_approx_eq!(f32, star.head().x(), 20.0, epsilon = 1e-3);
        assert_approx_eq!(f32, star.tail().x(), 0.0, epsilon = 1e-3);
        assert_approx_eq!(f32, star.tail().y(), 0.0, epsilon = 1e-3);

        star.advance(600.0);
        // Trail reach is capped at half the travel vector
        let tail = star.tail();
        assert_approx_eq!(f32, tail.x(), 30.0, epsilon = 1e-3);
        assert_approx_eq!(f32, tail.y(), 30.0, epsilon = 1e-3);
    }
}
