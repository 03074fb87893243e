//! Parser configuration.

use serde::{Deserialize, Serialize};

/// How a single hex digit in `#RGB` / `#RGBA` becomes a channel byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortHex {
    /// The digit is the byte value itself: `#F00` → red channel `0x0F`.
    #[default]
    Nibble,
    /// The digit is repeated, as CSS does: `#F00` → red channel `0xFF`.
    Doubled,
}

/// Knobs for [`crate::Parser`]. The defaults accept every supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Expansion rule for 3- and 4-digit hex.
    pub short_hex: ShortHex,
    /// Match function names (`rgb`, `RGBA`, `Hsl`, ...) regardless of ASCII
    /// case. When `false` only lowercase names are accepted.
    pub case_insensitive: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            short_hex: ShortHex::Nibble,
            case_insensitive: true,
        }
    }
}
