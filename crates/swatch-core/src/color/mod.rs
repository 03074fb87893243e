//! Color model — the RGBA and HSLA value types and the conversions between them.
//!
//! [`Rgba`] and [`Hsla`] are two views of the same color. [`Color`] tags
//! which view a value currently holds, so parsed input can keep the model it
//! was written in until a caller asks for the other one.

pub mod hsla;
pub mod hsva;
pub mod rgba;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use hsla::Hsla;
pub use hsva::Hsva;
pub use rgba::Rgba;

use crate::error::ParseError;

/// A color in one of the two canonical models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum Color {
    /// Normalized red, green, blue and alpha.
    Rgba(Rgba),
    /// Hue in degrees, saturation, lightness and alpha.
    Hsla(Hsla),
}

impl Color {
    /// The RGBA view of this color.
    pub fn to_rgba(self) -> Rgba {
        match self {
            Self::Rgba(rgba) => rgba,
            Self::Hsla(hsla) => hsla.to_rgba(),
        }
    }

    /// The HSLA view of this color.
    pub fn to_hsla(self) -> Hsla {
        match self {
            Self::Rgba(rgba) => rgba.to_hsla(),
            Self::Hsla(hsla) => hsla,
        }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when the color is not fully opaque.
    pub fn to_hex(self) -> String {
        self.to_rgba().to_hex()
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self::Rgba(rgba)
    }
}

impl From<Hsla> for Color {
    fn from(hsla: Hsla) -> Self {
        Self::Hsla(hsla)
    }
}

impl From<Hsva> for Color {
    fn from(hsva: Hsva) -> Self {
        Self::Rgba(hsva.to_rgba())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rgba(), f)
    }
}

/// RGBA view of an optional color. `None` yields the all-zero [`Rgba`].
pub fn as_rgba(color: impl Into<Option<Color>>) -> Rgba {
    color.into().map(Color::to_rgba).unwrap_or_default()
}

/// HSLA view of an optional color. `None` yields the all-zero [`Hsla`].
pub fn as_hsla(color: impl Into<Option<Color>>) -> Hsla {
    color.into().map(Color::to_hsla).unwrap_or_default()
}

/// Wrap a hue in degrees into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`; that
/// case folds back to `0.0`.
pub(crate) fn normalize_hue(degrees: f64) -> f64 {
    let hue = degrees.rem_euclid(360.0);
    if hue >= 360.0 { 0.0 } else { hue }
}
