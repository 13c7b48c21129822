//! Fixed-width canonical value rendering.

use std::fmt;

use serde::Serialize;

/// Total width of a canonical value, including the decimal point.
pub const CANONICAL_WIDTH: usize = 24;

/// Digits rendered after the decimal point.
pub const FRACTION_DIGITS: usize = 12;

/// A magnitude in base SI units, rendered so that string order is numeric order.
///
/// The value always has exactly [`FRACTION_DIGITS`] fractional digits and is
/// left-padded with `'0'` to [`CANONICAL_WIDTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalValue(String);

impl CanonicalValue {
    /// Render a magnitude, or `None` if it is negative, not finite, or too wide.
    pub fn from_magnitude(magnitude: f64) -> Option<Self> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return None;
        }
        // -0.0 would otherwise render with a sign.
        let rendered = render_fixed(magnitude.abs());
        if rendered.len() > CANONICAL_WIDTH {
            return None;
        }
        Some(Self(format!("{rendered:0>width$}", width = CANONICAL_WIDTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Render a magnitude with exactly [`FRACTION_DIGITS`] digits and no padding.
pub(crate) fn render_fixed(magnitude: f64) -> String {
    format!("{magnitude:.digits$}", digits = FRACTION_DIGITS)
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(magnitude: f64) -> String {
        CanonicalValue::from_magnitude(magnitude)
            .expect("magnitude fits")
            .into_string()
    }

    #[test]
    fn test_padding_and_precision() {
        assert_eq!(canonical(0.0), "00000000000.000000000000");
        assert_eq!(canonical(220.0), "00000000220.000000000000");
        assert_eq!(canonical(1e-10), "00000000000.000000000100");
        assert_eq!(canonical(4.7e-9), "00000000000.000000004700");
    }

    #[test]
    fn test_width_is_fixed() {
        for magnitude in [0.0, 1e-12, 1.0, 4_700_000.0, 99_999_999_999.0] {
            assert_eq!(canonical(magnitude).len(), CANONICAL_WIDTH);
        }
    }

    #[test]
    fn test_never_scientific() {
        let value = canonical(1e10);
        assert!(!value.contains('e'));
        assert_eq!(value, "10000000000.000000000000");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(canonical(-0.0), "00000000000.000000000000");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(CanonicalValue::from_magnitude(1e11).is_none());
        assert!(CanonicalValue::from_magnitude(-1.0).is_none());
        assert!(CanonicalValue::from_magnitude(f64::INFINITY).is_none());
        assert!(CanonicalValue::from_magnitude(f64::NAN).is_none());
    }
}
