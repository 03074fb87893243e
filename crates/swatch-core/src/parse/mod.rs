//! Tolerant string → color parser.
//!
//! Grammars are tried in a fixed priority order and the first match wins:
//!
//! ```text
//!   rgb(r g b)  →  rgba(r g b a)  →  hsl(h s l)  →  hsla(h s l a)
//!     →  hsv(h s v)  →  hsva(h s v a)
//!     →  #RRGGBBAA  →  #RRGGBB  →  #RGBA  →  #RGB
//! ```
//!
//! The functional forms are searched anywhere in the trimmed input and accept
//! commas and/or whitespace between components. The hex forms must cover the
//! whole input, with an optional leading `#`. Longer hex forms are tried first
//! so a 4-digit string is never read as 3 digits plus noise.

mod options;
mod units;

use std::sync::LazyLock;

use regex::Regex;

pub use options::{ParseOptions, ShortHex};

use crate::color::{Color, Hsla, Hsva, Rgba};
use crate::error::ParseError;

/// Optionally signed integer, optionally suffixed with `%`.
const CSS_INTEGER: &str = r"[-+]?[0-9]+%?";
/// Optionally signed decimal with a fractional part, optionally suffixed with `%`.
const CSS_NUMBER: &str = r"[-+]?[0-9]*\.[0-9]+%?";

/// The functional notations, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Function {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
}

impl Function {
    const ALL: [Self; 6] = [
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
        Self::Hsva,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Hsva => "hsva",
        }
    }

    const fn arity(self) -> usize {
        match self {
            Self::Rgb | Self::Hsl | Self::Hsv => 3,
            Self::Rgba | Self::Hsla | Self::Hsva => 4,
        }
    }

    /// `name` followed loosely by `arity` CSS units.
    ///
    /// Group 1 is the function name as written; groups 2.. are the units.
    fn pattern(self) -> String {
        let unit = format!("((?:{CSS_NUMBER})|(?:{CSS_INTEGER}))");
        let mut pattern = format!(r"(?i:({}))[\s|(]+{unit}", self.name());
        for _ in 1..self.arity() {
            pattern.push_str(r"[,|\s]+");
            pattern.push_str(&unit);
        }
        pattern.push_str(r"\s*\)?");
        pattern
    }

    /// Build a color from the captured unit tokens. `args.len() == arity()`.
    fn decode(self, args: &[&str]) -> Color {
        let alpha = args.get(3).map_or(u8::MAX, |token| units::alpha_byte(token));
        match self {
            Self::Rgb | Self::Rgba => Color::Rgba(Rgba::from_bytes([
                units::channel_byte(args[0]),
                units::channel_byte(args[1]),
                units::channel_byte(args[2]),
                alpha,
            ])),
            Self::Hsl | Self::Hsla => Color::Hsla(Hsla::new(
                units::hue_degrees(args[0]),
                units::percent_fraction(args[1]),
                units::percent_fraction(args[2]),
                f64::from(alpha) / 255.0,
            )),
            Self::Hsv | Self::Hsva => Color::from(Hsva::new(
                units::hue_degrees(args[0]),
                units::percent_fraction(args[1]),
                units::percent_fraction(args[2]),
                f64::from(alpha) / 255.0,
            )),
        }
    }
}

/// Hex digit counts per channel and channel count, in match priority order.
const HEX_FORMS: [(usize, usize); 4] = [(2, 4), (2, 3), (1, 4), (1, 3)];

static FUNCTION_RES: LazyLock<Vec<(Function, Regex)>> = LazyLock::new(|| {
    Function::ALL
        .iter()
        .map(|&function| {
            let re = Regex::new(&function.pattern()).expect("valid functional regex");
            (function, re)
        })
        .collect()
});

static HEX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    HEX_FORMS
        .iter()
        .map(|&(digits, channels)| {
            let group = format!("([0-9a-fA-F]{{{digits}}})");
            Regex::new(&format!("^#?{}$", group.repeat(channels))).expect("valid hex regex")
        })
        .collect()
});

/// Parses color strings according to a set of [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `text` into a color.
    ///
    /// Leading and trailing whitespace is ignored. `rgb`, `rgba` and hex
    /// input produce [`Color::Rgba`] with byte-quantized channels; `hsl` and
    /// `hsla` produce [`Color::Hsla`]; `hsv` and `hsva` are converted to
    /// [`Color::Rgba`].
    pub fn parse(&self, text: &str) -> Result<Color, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        self.parse_functional(text)
            .or_else(|| self.parse_hex(text))
            .ok_or_else(|| ParseError::NotRecognized(text.to_string()))
    }

    fn parse_functional(&self, text: &str) -> Option<Color> {
        FUNCTION_RES.iter().find_map(|(function, re)| {
            let caps = re.captures(text)?;
            if !self.options.case_insensitive && &caps[1] != function.name() {
                return None;
            }

            let args: Vec<&str> = caps
                .iter()
                .skip(2)
                .flatten()
                .map(|m| m.as_str())
                .collect();
            tracing::trace!(grammar = function.name(), ?args, "matched functional color");
            Some(function.decode(&args))
        })
    }

    fn parse_hex(&self, text: &str) -> Option<Color> {
        HEX_RES.iter().find_map(|re| {
            let caps = re.captures(text)?;

            // Forms without an alpha group stay opaque.
            let mut bytes = [u8::MAX; 4];
            for (slot, digits) in bytes.iter_mut().zip(caps.iter().skip(1).flatten()) {
                *slot = self.hex_channel(digits.as_str());
            }
            tracing::trace!(?bytes, "matched hex color");
            Some(Color::Rgba(Rgba::from_bytes(bytes)))
        })
    }

    fn hex_channel(&self, digits: &str) -> u8 {
        let value = units::hex_byte(digits);
        match (digits.len(), self.options.short_hex) {
            (1, ShortHex::Doubled) => value * 17,
            _ => value,
        }
    }
}

/// Parse `text` with the default [`ParseOptions`].
///
/// ```
/// use swatch_core::parse;
///
/// let color = parse("rgba(255, 0, 0, 0.5)").unwrap();
/// assert_eq!(color.to_rgba().to_bytes(), [255, 0, 0, 128]);
/// assert!(parse("not-a-color").is_err());
/// ```
pub fn parse(text: &str) -> Result<Color, ParseError> {
    Parser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn bytes(text: &str) -> [u8; 4] {
        parse(text)
            .unwrap_or_else(|e| panic!("{text:?} should parse: {e}"))
            .to_rgba()
            .to_bytes()
    }

    #[test]
    fn test_rgb_basic() {
        assert_eq!(bytes("rgb(255, 128, 0)"), [255, 128, 0, 255]);
        assert_eq!(bytes("rgb(10 20 30)"), [10, 20, 30, 255]);
        assert_eq!(bytes("  rgb(1,2,3)  "), [1, 2, 3, 255]);
    }

    #[test]
    fn test_rgb_percent_rounds_half_up() {
        assert_eq!(bytes("rgb(50%, 0, 0)"), [128, 0, 0, 255]);
    }

    #[test]
    fn test_rgb_clamps_channels() {
        assert_eq!(bytes("rgb(300, -10, 0)"), [255, 0, 0, 255]);
    }

    #[test]
    fn test_rgb_is_permissive() {
        // No closing paren, mixed separators, signed decimals.
        assert_eq!(bytes("rgb( +10.4 ,20,  .5"), [10, 20, 1, 255]);
        assert_eq!(bytes("color: rgb(0 0 255);"), [0, 0, 255, 255]);
    }

    #[test]
    fn test_rgba_alpha() {
        assert_eq!(bytes("rgba(255, 0, 0, 0.5)"), [255, 0, 0, 128]);
        assert_eq!(bytes("rgba(0, 0, 0, 25%)"), [0, 0, 0, 64]);
        assert_eq!(bytes("rgba(0, 0, 0, 2)"), [0, 0, 0, 255]);
    }

    #[test]
    fn test_function_names_ignore_case_by_default() {
        assert_eq!(bytes("RGBA(255, 0, 0, 0.5)"), [255, 0, 0, 128]);
        assert_eq!(bytes("Rgb(1, 2, 3)"), [1, 2, 3, 255]);
    }

    #[test]
    fn test_case_sensitive_option() {
        let parser = Parser::new(ParseOptions {
            case_insensitive: false,
            ..ParseOptions::default()
        });
        assert!(parser.parse("rgba(255, 0, 0, 0.5)").is_ok());
        assert_eq!(
            parser.parse("RGBA(255, 0, 0, 0.5)"),
            Err(ParseError::NotRecognized("RGBA(255, 0, 0, 0.5)".to_string()))
        );
    }

    #[test]
    fn test_hsl_yields_hsla() {
        let color = parse("hsl(120, 100%, 50%)").expect("hsl parses");
        assert_eq!(color, Color::Hsla(Hsla::new(120.0, 1.0, 0.5, 1.0)));
        assert_eq!(color.to_hex(), "#00FF00");
    }

    #[test]
    fn test_hsla_alpha() {
        let hsla = parse("hsla(240 100% 50% 0.5)").expect("hsla parses").to_hsla();
        assert_eq!((hsla.h, hsla.s, hsla.l), (240.0, 1.0, 0.5));
        assert!((hsla.a - 128.0 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_hsv_converts_to_rgba() {
        assert_eq!(bytes("hsv(0, 100%, 100%)"), [255, 0, 0, 255]);
        assert_eq!(bytes("hsva(120, 100%, 50%, 1)"), [0, 128, 0, 255]);
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(bytes("#FF8000"), [255, 128, 0, 255]);
        assert_eq!(bytes("ff800080"), [255, 128, 0, 128]);
        assert_eq!(bytes("#abc"), [10, 11, 12, 255]);
        assert_eq!(bytes("#ABCD"), [10, 11, 12, 13]);
    }

    #[test]
    fn test_four_digit_hex_is_not_three_digit() {
        // With alpha in the fourth nibble, not an opaque #ABC.
        assert_ne!(bytes("#ABCD")[3], 255);
    }

    #[test]
    fn test_hex_rejects_other_lengths() {
        assert!(parse("#12345").is_err());
        assert!(parse("#1234567").is_err());
        assert!(parse("#12").is_err());
        assert!(parse("#GGGGGG").is_err());
    }

    #[test]
    fn test_short_hex_doubled_option() {
        let parser = Parser::new(ParseOptions {
            short_hex: ShortHex::Doubled,
            ..ParseOptions::default()
        });
        let color = parser.parse("#F80").expect("short hex parses");
        assert_eq!(color.to_rgba().to_bytes(), [255, 136, 0, 255]);
        let color = parser.parse("#F808").expect("short hex parses");
        assert_eq!(color.to_rgba().to_bytes(), [255, 136, 0, 136]);
    }

    #[test]
    fn test_no_match_is_an_error_value() {
        assert_eq!(
            parse("not-a-color"),
            Err(ParseError::NotRecognized("not-a-color".to_string()))
        );
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("red"), Err(ParseError::NotRecognized("red".to_string())));
        assert_eq!(crate::as_rgba(parse("nope").ok()), Rgba::default());
    }

    #[test]
    fn test_rgb_missing_component_is_not_recognized() {
        assert!(parse("rgb(1, 2)").is_err());
    }
}
