//! Hue, saturation, lightness and alpha, and the HSL → RGB synthesis.

use serde::{Deserialize, Serialize};

use super::normalize_hue;
use super::rgba::Rgba;

/// A color in the cylindrical HSL model.
///
/// Construction does not normalize: `h` may sit outside `[0, 360)` and is
/// wrapped when the color is converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation in `[0, 1]`.
    pub s: f64,
    /// Lightness in `[0, 1]`.
    pub l: f64,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Convert back to RGBA using the trapezoidal hue profile.
    ///
    /// ```text
    /// t1 = L × (1 + S)       if L < 0.5
    ///      L + S − L × S     otherwise
    /// t2 = 2L − t1
    ///
    /// channel(t) = t2 + (t1 − t2) × 6t          6t < 1
    ///              t1                           2t < 1
    ///              t2 + (t1 − t2) × (2/3 − t) × 6   3t < 2
    ///              t2                           otherwise
    /// ```
    ///
    /// Red, green and blue sample the profile at `h/360 + 1/3`, `h/360` and
    /// `h/360 − 1/3`. Zero saturation short-circuits to `(L, L, L)`.
    pub fn to_rgba(self) -> Rgba {
        let Self { h, s, l, a } = self;
        if s == 0.0 {
            return Rgba::new(l, l, l, a);
        }

        let t1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let t2 = 2.0 * l - t1;
        let hue = normalize_hue(h) / 360.0;

        Rgba::new(
            hue_to_channel(wrap_unit(hue + 1.0 / 3.0), t1, t2),
            hue_to_channel(wrap_unit(hue), t1, t2),
            hue_to_channel(wrap_unit(hue - 1.0 / 3.0), t1, t2),
            a,
        )
    }

    /// Uppercase hex of the RGBA equivalent.
    pub fn to_hex(self) -> String {
        self.to_rgba().to_hex()
    }
}

fn wrap_unit(t: f64) -> f64 {
    if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    }
}

// Thresholds are compared in multiplied form so that values landing exactly
// on 1/6, 1/2 and 2/3 pick the same branch every time.
fn hue_to_channel(t: f64, t1: f64, t2: f64) -> f64 {
    if 6.0 * t < 1.0 {
        t2 + (t1 - t2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        t1
    } else if 3.0 * t < 2.0 {
        t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
    } else {
        t2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_rgba_near(actual: Rgba, expected: [f64; 4]) {
        let got = [actual.r, actual.g, actual.b, actual.a];
        for i in 0..4 {
            assert!(
                (got[i] - expected[i]).abs() < EPSILON,
                "channel {i}: {:.9} vs {:.9}",
                got[i],
                expected[i]
            );
        }
    }

    #[test]
    fn test_primaries_to_rgba() {
        assert_rgba_near(Hsla::new(0.0, 1.0, 0.5, 1.0).to_rgba(), [1.0, 0.0, 0.0, 1.0]);
        assert_rgba_near(Hsla::new(120.0, 1.0, 0.5, 1.0).to_rgba(), [0.0, 1.0, 0.0, 1.0]);
        assert_rgba_near(Hsla::new(240.0, 1.0, 0.5, 1.0).to_rgba(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_secondaries_to_rgba() {
        assert_rgba_near(Hsla::new(60.0, 1.0, 0.5, 1.0).to_rgba(), [1.0, 1.0, 0.0, 1.0]);
        assert_rgba_near(Hsla::new(180.0, 1.0, 0.5, 1.0).to_rgba(), [0.0, 1.0, 1.0, 1.0]);
        assert_rgba_near(Hsla::new(300.0, 1.0, 0.5, 1.0).to_rgba(), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        for hue in [0.0, 90.0, 359.0] {
            assert_rgba_near(Hsla::new(hue, 0.0, 0.3, 0.7).to_rgba(), [0.3, 0.3, 0.3, 0.7]);
        }
    }

    #[test]
    fn test_out_of_range_hue_wraps() {
        let wrapped = Hsla::new(480.0, 1.0, 0.5, 1.0).to_rgba();
        let direct = Hsla::new(120.0, 1.0, 0.5, 1.0).to_rgba();
        assert_rgba_near(wrapped, [direct.r, direct.g, direct.b, direct.a]);

        let negative = Hsla::new(-120.0, 1.0, 0.5, 1.0).to_rgba();
        assert_rgba_near(negative, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_light_branch() {
        // L >= 0.5 takes t1 = L + S − L·S.
        assert_rgba_near(Hsla::new(0.0, 1.0, 0.75, 1.0).to_rgba(), [1.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(1.0), 1.0);
    }

    #[test]
    fn test_hsla_hex() {
        assert_eq!(Hsla::new(120.0, 1.0, 0.25, 1.0).to_hex(), "#008000");
    }
}
