//! 8-bit ARGB color.
//!
//! Alpha is only ever 0 or 255: alpha 0 marks "no surface here" (the usual
//! background), opaque colors come from shapes and from shadows.

use image::Rgba;

/// Color with alpha and RGB channels in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Alpha channel.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Fully transparent black, the conventional background.
    pub const TRANSPARENT: Color = Color::argb(0, 0, 0, 0);

    /// Opaque black, written for shadowed surface points.
    pub const BLACK: Color = Color::argb(255, 0, 0, 0);

    /// Build a color from alpha and RGB channels.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Build an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// Multiply the RGB channels by `factor`, rounding to nearest.
    ///
    /// Alpha is left untouched. Channels saturate at 255 when the light is
    /// brighter than 1.
    pub fn scale(self, factor: f32) -> Self {
        let channel = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            a: self.a,
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    /// Linear `[0, 1]` RGBA floats, used for EXR and TEV output.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Color::argb(a, r, g, b)
    }
}
