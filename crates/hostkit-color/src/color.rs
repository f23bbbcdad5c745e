//! The canonical color value.
//!
//! A [`Color`] holds four normalized `f64` channels. Every parser in this
//! crate produces one, and the resolver hands out copies of the values it
//! has cached.

use serde::{Deserialize, Serialize};

/// Luma weight below which a color counts as dark.
const DARKNESS_THRESHOLD: f64 = 125.0;

/// A color with red, green, blue and alpha channels in `[0, 1]`.
///
/// `Color` is `Copy`; nothing mutates a value once it has been built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Fully transparent black. Returned whenever resolution fails.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from already-normalized channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels, dividing each by 255.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// Creates an opaque gray where every color channel equals `white`.
    pub const fn gray(white: f64) -> Self {
        Self::new(white, white, white, 1.0)
    }

    /// Creates a color, clamping every channel into `[0, 1]`.
    pub fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(
            r.clamp(0.0, 1.0),
            g.clamp(0.0, 1.0),
            b.clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        )
    }

    /// Returns the channels as an `[r, g, b, a]` array.
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns `true` for a fully transparent color.
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Luma weight used by [`Color::is_dark`], on the 0–255 channel scale.
    ///
    /// Only the blue term is divided by 1000. Callers comparing against the
    /// usual `(299 R + 587 G + 114 B) / 1000` brightness should not use this.
    pub fn luma_weight(&self) -> f64 {
        let red = self.r * 255.0;
        let green = self.g * 255.0;
        let blue = self.b * 255.0;

        (red * 299.0) + (green * 587.0) + (blue * 114.0) / 1000.0
    }

    /// Returns `true` when the luma weight is below 125.
    pub fn is_dark(&self) -> bool {
        self.luma_weight() < DARKNESS_THRESHOLD
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

impl From<[f64; 4]> for Color {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Color::new(r, g, b, a)
    }
}

/// Free-function form of [`Color::is_dark`].
pub fn is_dark(color: Color) -> bool {
    color.is_dark()
}
