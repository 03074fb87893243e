//! Hue, saturation, value — the model behind `hsv()` / `hsva()` input.

use serde::{Deserialize, Serialize};

use super::normalize_hue;
use super::rgba::Rgba;

/// A color in the HSV (a.k.a. HSB) model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl Hsva {
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Convert to RGBA.
    ///
    /// ```text
    /// C = V × S
    /// X = C × (1 − |(H / 60) mod 2 − 1|)
    /// m = V − C
    /// ```
    pub fn to_rgba(self) -> Rgba {
        let h = normalize_hue(self.h);
        let c = self.v * self.s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h {
            0.0..60.0 => (c, x, 0.0),
            60.0..120.0 => (x, c, 0.0),
            120.0..180.0 => (0.0, c, x),
            180.0..240.0 => (0.0, x, c),
            240.0..300.0 => (x, 0.0, c),
            _ => (c, 0.0, x), // 300.0..360.0
        };

        Rgba::new(r + m, g + m, b + m, self.a)
    }
}
