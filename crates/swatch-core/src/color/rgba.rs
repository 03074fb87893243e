//! Normalized RGBA color and the conversions that start from RGB.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hsla::Hsla;
use super::hsva::Hsva;

/// Scale between a normalized channel and its byte-quantized form.
const BYTE_SCALE: f64 = 255.0;

/// Gamma-encoded red, green, blue and alpha, each nominally in `[0, 1]`.
///
/// Arithmetic such as [`crate::mix`] may leave channels outside that range.
/// Only [`Rgba::to_bytes`] and the hex serializer clamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red intensity.
    pub r: f64,
    /// Green intensity.
    pub g: f64,
    /// Blue intensity.
    pub b: f64,
    /// Opacity. `1.0` is fully opaque.
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build from byte-quantized `[r, g, b, a]`.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes.map(|v| f64::from(v) / BYTE_SCALE);
        Self { r, g, b, a }
    }

    /// Quantize to `[r, g, b, a]` bytes via `round(v × 255)`, clamping first.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(channel_to_byte)
    }

    /// Whether alpha quantizes to full opacity.
    pub fn is_opaque(self) -> bool {
        channel_to_byte(self.a) == u8::MAX
    }

    /// Uppercase hex: `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to hue, saturation, lightness.
    ///
    /// ```text
    /// L = (max + min) / 2
    /// S = (max − min) / (max + min)        if L < 0.5
    ///     (max − min) / (2 − max − min)    otherwise
    /// ```
    ///
    /// Achromatic input (`min == max`) yields `H = 0`, `S = 0`.
    pub fn to_hsla(self) -> Hsla {
        let Self { r, g, b, a } = self;
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let l = (max + min) / 2.0;

        if min == max {
            return Hsla::new(0.0, 0.0, l, a);
        }

        let delta = max - min;
        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Hsla::new(hue_degrees(r, g, b, max, delta), s, l, a)
    }

    /// Convert to hue, saturation, value.
    pub fn to_hsva(self) -> Hsva {
        let Self { r, g, b, a } = self;
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else {
            hue_degrees(r, g, b, max, delta)
        };

        Hsva::new(h, s, max, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_bytes();
        if a == u8::MAX {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

pub(crate) fn channel_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * BYTE_SCALE).round() as u8
}

/// Hue angle shared by the HSL and HSV conversions. `delta` must be non-zero.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    // A sliver below zero can round up to exactly 360.
    if h >= 360.0 { h - 360.0 } else { h }
}
