//! Swatch Core — color parsing, RGB/HSL conversion and palette manipulation.
//!
//! Colors enter as text (`#RGB` through `#RRGGBBAA`, `rgb()`, `rgba()`,
//! `hsl()`, `hsla()`, `hsv()`, `hsva()`), become [`Rgba`] or [`Hsla`]
//! values, pass through pure adjustment and harmony functions, and leave as
//! hex text. Nothing here holds state or performs I/O.

pub mod adjust;
pub mod color;
pub mod error;
pub mod harmony;
pub mod parse;
pub mod random;

// Re-exports for convenience.
pub use adjust::{brighten, desaturate, greyscale, lighten, mix, multiply, saturate, spin};
pub use color::{Color, Hsla, Hsva, Rgba, as_hsla, as_rgba};
pub use error::ParseError;
pub use harmony::{Scheme, tetrad, triad};
pub use parse::{ParseOptions, Parser, ShortHex, parse};
pub use random::{random, random_with};
