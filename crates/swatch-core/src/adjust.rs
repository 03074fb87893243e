//! Color adjustments — lightness, saturation, hue rotation, brightness, mixing.
//!
//! HSL-space adjustments take and return [`Hsla`]; RGB-space adjustments take
//! and return [`Rgba`]. Amounts are percentages (`10.0` means 10 %), except
//! for [`spin`], which takes degrees. Each function is also available as a
//! method on its input type.

use crate::color::{Hsla, Rgba, normalize_hue};

/// Set lightness to `amount` percent.
///
/// This overwrites lightness instead of adding to it:
/// `lighten(c, 80.0)` yields `L = 0.8` whatever `c.l` was.
///
/// ```text
/// L = clamp(amount / 100, 0, 1)
/// ```
pub fn lighten(hsla: Hsla, amount: f64) -> Hsla {
    Hsla {
        l: (amount / 100.0).clamp(0.0, 1.0),
        ..hsla
    }
}

/// Shift saturation by `amount` percent. Negative amounts desaturate.
///
/// ```text
/// S = clamp(S + amount / 100, 0, 1)
/// ```
pub fn saturate(hsla: Hsla, amount: f64) -> Hsla {
    Hsla {
        s: (hsla.s + amount / 100.0).clamp(0.0, 1.0),
        ..hsla
    }
}

/// Lower saturation by `amount` percent.
pub fn desaturate(hsla: Hsla, amount: f64) -> Hsla {
    saturate(hsla, -amount)
}

/// Drop all saturation.
pub fn greyscale(hsla: Hsla) -> Hsla {
    saturate(hsla, -100.0)
}

/// Rotate hue by `degrees`, wrapping into `[0, 360)`.
pub fn spin(hsla: Hsla, degrees: f64) -> Hsla {
    Hsla {
        h: normalize_hue(hsla.h + degrees),
        ..hsla
    }
}

/// Add `amount` percent to each of red, green and blue. Alpha is untouched.
///
/// ```text
/// c = clamp(c + amount / 100, 0, 1)    for c in {R, G, B}
/// ```
pub fn brighten(rgba: Rgba, amount: f64) -> Rgba {
    let shift = |c: f64| (c + amount / 100.0).clamp(0.0, 1.0);
    Rgba {
        r: shift(rgba.r),
        g: shift(rgba.g),
        b: shift(rgba.b),
        a: rgba.a,
    }
}

/// Linear interpolation from `from` towards `to`, alpha included.
///
/// ```text
/// out = from + (to − from) × amount / 100
/// ```
///
/// Amounts outside `[0, 100]` extrapolate and are not clamped.
pub fn mix(from: Rgba, to: Rgba, amount: f64) -> Rgba {
    let t = amount / 100.0;
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    Rgba {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
        a: lerp(from.a, to.a),
    }
}

/// Channel-wise product, alpha included.
pub fn multiply(lhs: Rgba, rhs: Rgba) -> Rgba {
    Rgba {
        r: lhs.r * rhs.r,
        g: lhs.g * rhs.g,
        b: lhs.b * rhs.b,
        a: lhs.a * rhs.a,
    }
}

impl Hsla {
    /// See [`lighten`]. Sets lightness absolutely.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        lighten(self, amount)
    }

    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        saturate(self, amount)
    }

    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        desaturate(self, amount)
    }

    #[must_use]
    pub fn greyscale(self) -> Self {
        greyscale(self)
    }

    #[must_use]
    pub fn spin(self, degrees: f64) -> Self {
        spin(self, degrees)
    }
}

impl Rgba {
    #[must_use]
    pub fn brighten(self, amount: f64) -> Self {
        brighten(self, amount)
    }

    #[must_use]
    pub fn mix(self, other: Rgba, amount: f64) -> Self {
        mix(self, other, amount)
    }

    #[must_use]
    pub fn multiply(self, other: Rgba) -> Self {
        multiply(self, other)
    }
}
