//! Harmony schemes — fixed hue rotations of a single base color.
//!
//! Only hue changes; saturation, lightness and alpha are copied from the base.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adjust::spin;
use crate::color::Hsla;

/// Hue offsets of the triad scheme, in degrees.
pub const TRIAD_OFFSETS: [f64; 3] = [0.0, 120.0, 240.0];
/// Hue offsets of the tetrad scheme, in degrees.
pub const TETRAD_OFFSETS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Three colors evenly spaced around the wheel, starting at `base`.
pub fn triad(base: Hsla) -> [Hsla; 3] {
    TRIAD_OFFSETS.map(|offset| spin(base, offset))
}

/// Four colors evenly spaced around the wheel, starting at `base`.
pub fn tetrad(base: Hsla) -> [Hsla; 4] {
    TETRAD_OFFSETS.map(|offset| spin(base, offset))
}

/// A harmony scheme selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Triad,
    Tetrad,
}

impl Scheme {
    /// Hue offsets, in degrees, this scheme applies to its base color.
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Triad => &TRIAD_OFFSETS,
            Self::Tetrad => &TETRAD_OFFSETS,
        }
    }

    /// Generate the scheme for `base`. The first entry is `base` itself,
    /// with its hue wrapped into `[0, 360)`.
    pub fn generate(self, base: Hsla) -> Vec<Hsla> {
        match self {
            Self::Triad => triad(base).to_vec(),
            Self::Tetrad => tetrad(base).to_vec(),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triad => write!(f, "triad"),
            Self::Tetrad => write!(f, "tetrad"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "triad" => Ok(Self::Triad),
            "tetrad" => Ok(Self::Tetrad),
            other => Err(format!("unknown scheme: {other}")),
        }
    }
}

impl Hsla {
    #[must_use]
    pub fn triad(self) -> [Hsla; 3] {
        triad(self)
    }

    #[must_use]
    pub fn tetrad(self) -> [Hsla; 4] {
        tetrad(self)
    }
}
