//! Background starfield.

use log::debug;
use rand::{Rng, seq::IndexedRandom};

use starfall_core::{
    color::Color,
    geometry::{Point, Size},
};

use super::random::{point_in_disc, random_sign, uniform};
use crate::config::CountRange;

/// Brightness a twinkling star never exceeds.
pub const MAX_BRIGHTNESS: f32 = 1.0;
/// Brightness a twinkling star never drops below.
pub const MIN_BRIGHTNESS: f32 = 0.4;

/// Scale from `brightness_delta` per millisecond to brightness change.
const TWINKLE_RATE: f32 = 0.02;

/// Share of stars placed inside a density region.
const REGION_SHARE: f64 = 0.7;

/// A star type: size and brightness ranges plus an RGB tint.
struct StarType {
    size: [f32; 2],
    brightness: [f32; 2],
    tint: [u8; 3],
}

const STAR_TYPES: [StarType; 6] = [
    // white
    StarType {
        size: [0.5, 1.2],
        brightness: [0.5, 0.8],
        tint: [255, 255, 255],
    },
    // yellow
    StarType {
        size: [0.5, 1.5],
        brightness: [0.5, 0.9],
        tint: [255, 240, 220],
    },
    // blue
    StarType {
        size: [0.5, 1.3],
        brightness: [0.5, 0.8],
        tint: [220, 240, 255],
    },
    // red
    StarType {
        size: [0.5, 1.4],
        brightness: [0.5, 0.9],
        tint: [255, 220, 220],
    },
    // cool blue
    StarType {
        size: [0.4, 1.0],
        brightness: [0.5, 0.7],
        tint: [200, 220, 255],
    },
    // warm orange
    StarType {
        size: [0.6, 1.6],
        brightness: [0.6, 0.9],
        tint: [255, 220, 180],
    },
];

/// A twinkling point of light.
///
/// Used for the background starfield and for constellation members.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    position: Point,
    size: f32,
    brightness: f32,
    brightness_delta: f32,
    tint: [u8; 3],
}

impl Star {
    pub fn new(
        position: Point,
        size: f32,
        brightness: f32,
        brightness_delta: f32,
        tint: [u8; 3],
    ) -> Self {
        Self {
            position,
            size,
            brightness,
            brightness_delta,
            tint,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn brightness_delta(&self) -> f32 {
        self.brightness_delta
    }

    /// The star's fill: its tint at its current brightness.
    pub fn color(&self) -> Color {
        let [r, g, b] = self.tint;
        Color::rgba(r, g, b, self.brightness)
    }

    /// Advances the twinkle by `dt` milliseconds.
    ///
    /// Brightness bounces between [`MIN_BRIGHTNESS`] and [`MAX_BRIGHTNESS`]:
    /// crossing a bound clamps to it and reverses the direction.
    pub fn twinkle(&mut self, dt: f32) {
        self.brightness += self.brightness_delta * dt * TWINKLE_RATE;
        if self.brightness > MAX_BRIGHTNESS {
            self.brightness = MAX_BRIGHTNESS;
            self.brightness_delta = -self.brightness_delta;
        } else if self.brightness < MIN_BRIGHTNESS {
            self.brightness = MIN_BRIGHTNESS;
            self.brightness_delta = -self.brightness_delta;
        }
    }
}

/// A disc that attracts most starfield placements.
#[derive(Debug, Clone, Copy)]
struct DensityRegion {
    center: Point,
    radius: f32,
}

/// Generates the background starfield.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Size, count: CountRange) -> Vec<Star> {
    let width = viewport.width();
    let height = viewport.height();
    let star_count = count.sample(rng);

    let region_count = rng.random_range(2..=4);
    let regions: Vec<DensityRegion> = (0..region_count)
        .map(|_| {
            let center = Point::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height));
            let radius = uniform(rng, 0.0, width / 3.0) + width / 6.0;
            DensityRegion { center, radius }
        })
        .collect();

    let bounds = viewport.to_bounds();
    let stars: Vec<Star> = (0..star_count)
        .map(|_| {
            let position = match regions.choose(rng) {
                Some(region) if rng.random_bool(REGION_SHARE) => {
                    point_in_disc(rng, region.center, region.radius).clamp_to(bounds)
                }
                _ => Point::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
            };

            let star_type = &STAR_TYPES[rng.random_range(0..STAR_TYPES.len())];
            let size = uniform(rng, star_type.size[0], star_type.size[1]);
            let brightness = uniform(rng, star_type.brightness[0], star_type.brightness[1]);
            let brightness_delta = uniform(rng, 0.003, 0.011) * random_sign(rng);

            Star::new(position, size, brightness, brightness_delta, star_type.tint)
        })
        .collect();

    debug!(stars = stars.len(), regions = regions.len(); "Starfield generated");
    stars
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn viewport() -> Size {
        Size::new(1280.0, 800.0)
    }

    #[test]
    fn test_generate_respects_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let stars = generate(&mut rng, viewport(), CountRange::new(350, 449));

        assert!((350..=449).contains(&stars.len()));
        let bounds = viewport().to_bounds();
        for star in &stars {
            assert!(bounds.contains(star.position()));
            assert!((0.4..=1.6).contains(&star.size()));
            assert!((0.5..=0.9).contains(&star.brightness()));
            let delta = star.brightness_delta().abs();
            assert!((0.003..=0.011).contains(&delta));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(&mut StdRng::seed_from_u64(5), viewport(), CountRange::new(10, 20));
        let b = generate(&mut StdRng::seed_from_u64(5), viewport(), CountRange::new(10, 20));
        assert_eq!(a, b);
    }

    #[test]
    fn test_twinkle_reverses_at_upper_bound() {
        let mut star = Star::new(Point::default(), 1.0, 0.99, 0.01, [255, 255, 255]);
        star.twinkle(100.0);

        assert_approx_eq!(f32, star.brightness(), MAX_BRIGHTNESS);
        assert_approx_eq!(f32, star.brightness_delta(), -0.01);
    }

    #[test]
    fn test_twinkle_reverses_at_lower_bound() {
        let mut star = Star::new(Point::default(), 1.0, 0.41, -0.01, [255, 255, 255]);
        star.twinkle(100.0);

        assert_approx_eq!(f32, star.brightness(), MIN_BRIGHTNESS);
        assert_approx_eq!(f32, star.brightness_delta(), 0.01);
    }

    #[test]
    fn test_star_color_uses_brightness_as_alpha() {
        let star = Star::new(Point::default(), 1.0, 0.6, 0.005, [255, 240, 220]);
        assert_approx_eq!(f32, star.color().alpha(), 0.6, epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn prop_twinkle_stays_in_bounds(
            start in MIN_BRIGHTNESS..=MAX_BRIGHTNESS,
            delta in -0.011f32..0.011,
            steps in prop::collection::vec(0.0f32..1000.0, 1..50),
        ) {
            let mut star = Star::new(Point::default(), 1.0, start, delta, [255, 255, 255]);
            for dt in steps {
                star.twinkle(dt);
                prop_assert!(star.brightness() >= MIN_BRIGHTNESS);
                prop_assert!(star.brightness() <= MAX_BRIGHTNESS);
            }
        }
    }
}
