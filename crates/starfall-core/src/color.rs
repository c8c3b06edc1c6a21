//! Scene colors.
//!
//! [`Color`] sits on top of `DynamicColor` from the color crate so a color keeps
//! the space it was made in: star and arm palettes are HSL, everything else
//! is sRGB. SVG attributes always receive the opaque CSS form, and alpha is
//! written separately as an opacity attribute.

use color::{AlphaColor, DynamicColor, Hsl, Srgb};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// sRGB color from 0-255 channels and a 0-1 alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfall_core::color::Color;
    ///
    /// let dust = Color::rgba(5, 5, 15, 0.8);
    /// assert!((dust.alpha() - 0.8).abs() < 1e-6);
    /// ```
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        let srgb = AlphaColor::<Srgb>::new([
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            alpha.clamp(0.0, 1.0),
        ]);
        Self {
            color: DynamicColor::from_alpha_color(srgb),
        }
    }

    /// Color from hue in degrees, saturation and lightness in percent, and
    /// a 0-1 alpha. Hues outside `[0, 360)` wrap around.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let hsl = AlphaColor::<Hsl>::new([
            hue.rem_euclid(360.0),
            saturation.clamp(0.0, 100.0),
            lightness.clamp(0.0, 100.0),
            alpha.clamp(0.0, 1.0),
        ]);
        Self {
            color: DynamicColor::from_alpha_color(hsl),
        }
    }

    /// Same color, different alpha.
    ///
    /// ```
    /// use starfall_core::color::Color;
    ///
    /// let glow = Color::rgba(255, 200, 50, 1.0).with_alpha(0.3);
    /// assert!((glow.alpha() - 0.3).abs() < 1e-6);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha.clamp(0.0, 1.0)),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Channels in the color's own space, alpha last.
    pub fn components(&self) -> [f32; 4] {
        self.color.components
    }

    /// CSS form with alpha forced to 1; pair with an opacity attribute.
    pub fn to_opaque_string(self) -> String {
        self.with_alpha(1.0).to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgba(0, 0, 0, 1.0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_opaque_string())
    }
}
