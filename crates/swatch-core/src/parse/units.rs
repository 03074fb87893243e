//! Decoding of CSS unit tokens captured by the functional grammars.
//!
//! A token is an optionally signed integer or decimal with an optional `%`
//! suffix. Every decoder clamps; none of them fail.

use crate::color::normalize_hue;

const BYTE_MAX: f64 = 255.0;

/// A color channel token as a byte.
///
/// `n%` scales `[0, 100]` onto `[0, 255]`; a bare `n` is the byte value.
/// Both clamp before rounding.
pub(crate) fn channel_byte(token: &str) -> u8 {
    match token.strip_suffix('%') {
        Some(percent) => percent_byte(number(percent)),
        None => number(token).clamp(0.0, BYTE_MAX).round() as u8,
    }
}

/// An alpha token as a byte.
///
/// `n%` behaves like a channel percentage; a bare `n` is a fraction in
/// `[0, 1]`, so `0.5` becomes `round(127.5) = 128` and `7` becomes `255`.
pub(crate) fn alpha_byte(token: &str) -> u8 {
    match token.strip_suffix('%') {
        Some(percent) => percent_byte(number(percent)),
        None => (number(token).clamp(0.0, 1.0) * BYTE_MAX).round() as u8,
    }
}

/// A hue token in degrees, wrapped into `[0, 360)`. `n%` is a share of a turn.
pub(crate) fn hue_degrees(token: &str) -> f64 {
    let degrees = match token.strip_suffix('%') {
        Some(percent) => number(percent) / 100.0 * 360.0,
        None => number(token),
    };
    normalize_hue(degrees)
}

/// A saturation, lightness or value token as a fraction in `[0, 1]`.
///
/// Read on a `0..100` scale with or without the `%` sign.
pub(crate) fn percent_fraction(token: &str) -> f64 {
    let digits = token.strip_suffix('%').unwrap_or(token);
    number(digits).clamp(0.0, 100.0) / 100.0
}

/// A run of one or two hex digits as a byte.
pub(crate) fn hex_byte(digits: &str) -> u8 {
    u8::from_str_radix(digits, 16).unwrap_or_else(|err| {
        tracing::warn!(digits, %err, "malformed hex literal, using 0");
        0
    })
}

fn percent_byte(percent: f64) -> u8 {
    (percent.clamp(0.0, 100.0) * BYTE_MAX / 100.0).round() as u8
}

fn number(token: &str) -> f64 {
    token.parse::<f64>().unwrap_or_else(|err| {
        tracing::warn!(token, %err, "malformed numeric literal, using 0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_byte_direct() {
        assert_eq!(channel_byte("0"), 0);
        assert_eq!(channel_byte("128"), 128);
        assert_eq!(channel_byte("+12.6"), 13);
        assert_eq!(channel_byte("300"), 255);
        assert_eq!(channel_byte("-10"), 0);
    }

    #[test]
    fn test_channel_byte_percent() {
        assert_eq!(channel_byte("50%"), 128);
        assert_eq!(channel_byte("100%"), 255);
        assert_eq!(channel_byte("150%"), 255);
        assert_eq!(channel_byte("-5%"), 0);
        assert_eq!(channel_byte(".5%"), 1);
    }

    #[test]
    fn test_alpha_byte() {
        assert_eq!(alpha_byte("0.5"), 128);
        assert_eq!(alpha_byte("1"), 255);
        assert_eq!(alpha_byte("0"), 0);
        assert_eq!(alpha_byte("-0.2"), 0);
        assert_eq!(alpha_byte("50%"), 128);
    }

    #[test]
    fn test_alpha_fraction_above_one_is_opaque() {
        assert_eq!(alpha_byte("1.5"), 255);
        assert_eq!(alpha_byte("42"), 255);
    }

    #[test]
    fn test_hue_degrees() {
        assert_eq!(hue_degrees("120"), 120.0);
        assert_eq!(hue_degrees("-90"), 270.0);
        assert_eq!(hue_degrees("400"), 40.0);
        assert_eq!(hue_degrees("50%"), 180.0);
    }

    #[test]
    fn test_percent_fraction() {
        assert_eq!(percent_fraction("50%"), 0.5);
        assert_eq!(percent_fraction("25"), 0.25);
        assert_eq!(percent_fraction("140%"), 1.0);
        assert_eq!(percent_fraction("-3"), 0.0);
    }

    #[test]
    fn test_malformed_literals_decode_as_zero() {
        assert_eq!(number("1.2.3"), 0.0);
        assert_eq!(channel_byte("abc"), 0);
        assert_eq!(hex_byte("zz"), 0);
        assert_eq!(hex_byte("fF"), 255);
    }
}
