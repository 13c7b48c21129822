//! Strict decimal parsing for the numeric part of a value.

/// Parse a plain non-negative decimal number.
///
/// Accepts ASCII digits with at most one decimal point and at least one
/// digit, after trimming surrounding whitespace. Signs, exponents, "inf",
/// "nan" and any other characters are rejected.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let mut digits = 0usize;
    let mut points = 0usize;
    for ch in trimmed.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_decimal() {
        assert_eq!(parse_decimal("10"), Some(10.0));
        assert_eq!(parse_decimal("4.7"), Some(4.7));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_decimal("  22 "), Some(22.0));
        assert_eq!(parse_decimal("2 2"), None);
    }

    #[test]
    fn test_rejects_non_decimal() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("-1"), None);
        assert_eq!(parse_decimal("+1"), None);
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("10xyz"), None);
    }
}
