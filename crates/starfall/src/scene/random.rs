//! Random sampling helpers shared by the scene generators.
//!
//! Every helper takes the caller's RNG so a single seeded generator drives a
//! whole scene.

use std::f32::consts::TAU;

use rand::Rng;

use starfall_core::{color::Color, geometry::Point};

/// Inclusive-exclusive channel ranges for a random `rgba()` color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaRange {
    red: [u8; 2],
    green: [u8; 2],
    blue: [u8; 2],
    alpha: [f32; 2],
}

impl RgbaRange {
    pub const fn new(red: [u8; 2], green: [u8; 2], blue: [u8; 2], alpha: [f32; 2]) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Draws a color; channels are floored, alpha is continuous.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let channel = |rng: &mut R, [lo, hi]: [u8; 2]| {
            uniform(rng, f32::from(lo), f32::from(hi)).floor().clamp(0.0, 255.0) as u8
        };
        let red = channel(rng, self.red);
        let green = channel(rng, self.green);
        let blue = channel(rng, self.blue);
        let alpha = uniform(rng, self.alpha[0], self.alpha[1]);
        Color::rgba(red, green, blue, alpha)
    }
}

/// Hue/saturation/lightness ranges for a random `hsla()` color.
///
/// The hue is spread symmetrically around `base_hue`; saturation and
/// lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslaRange {
    base_hue: f32,
    hue_spread: f32,
    saturation: [f32; 2],
    lightness: [f32; 2],
}

impl HslaRange {
    pub const fn new(
        base_hue: f32,
        hue_spread: f32,
        saturation: [f32; 2],
        lightness: [f32; 2],
    ) -> Self {
        Self {
            base_hue,
            hue_spread,
            saturation,
            lightness,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, alpha: f32) -> Color {
        let hue = self.base_hue + uniform(rng, -self.hue_spread / 2.0, self.hue_spread / 2.0);
        let saturation = uniform(rng, self.saturation[0], self.saturation[1]);
        let lightness = uniform(rng, self.lightness[0], self.lightness[1]);
        Color::hsla(hue, saturation, lightness, alpha)
    }
}

/// `lo + u * (hi - lo)` for `u` uniform in `[0, 1)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    rng.random::<f32>() * (hi - lo) + lo
}

/// `+1.0` or `-1.0` with equal probability.
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// A uniformly distributed angle in `[0, 2π)`.
pub fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    uniform(rng, 0.0, TAU)
}

/// A point at a uniform angle and a uniform distance up to `max_distance`
/// from `center`.
pub fn point_in_disc<R: Rng + ?Sized>(rng: &mut R, center: Point, max_distance: f32) -> Point {
    let angle = random_angle(rng);
    let distance = uniform(rng, 0.0, max_distance);
    Point::from_polar(center, angle, distance)
}

/// Rejection sampling over at most `attempts` candidates.
///
/// A fit is kept only if it came before the last attempt; a candidate that
/// first fits on the final attempt is discarded along with the slot.
pub fn place_with_attempts<R, T>(
    rng: &mut R,
    attempts: usize,
    mut candidate: impl FnMut(&mut R) -> Option<T>,
) -> Option<T>
where
    R: Rng + ?Sized,
{
    for attempt in 1..=attempts {
        if let Some(found) = candidate(rng) {
            return (attempt < attempts).then_some(found);
        }
    }
    None
}
