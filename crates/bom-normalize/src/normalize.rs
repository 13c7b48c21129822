//! Conversion of shorthand values into canonical sortable values.

use crate::canonical::{CanonicalValue, render_fixed};
use crate::error::{NormalizeError, Result};
use crate::kind::ComponentKind;
use crate::numeric::parse_decimal;
use crate::rules::{CAPACITOR_RULES, RESISTOR_RULES};

/// Normalize a raw value for the given component kind.
///
/// Returns the kind alongside the canonical value so callers can build both
/// sort columns from one call.
///
/// # Errors
///
/// - [`NormalizeError::UnsortableKind`] for [`ComponentKind::Other`]
/// - [`NormalizeError::UnrecognizedUnit`] when no suffix rule matches
/// - [`NormalizeError::InvalidNumericFormat`] when the number part is malformed
/// - [`NormalizeError::ValueOutOfRange`] when the magnitude is too wide
pub fn normalize(kind: ComponentKind, raw: &str) -> Result<(ComponentKind, CanonicalValue)> {
    let value = match kind {
        ComponentKind::Resistor => normalize_resistor(raw)?,
        ComponentKind::Capacitor => normalize_capacitor(raw)?,
        ComponentKind::Other => return Err(NormalizeError::UnsortableKind),
    };
    Ok((kind, value))
}

/// Normalize a resistor value ("100R", "10k", "4.7M") to ohms.
pub fn normalize_resistor(raw: &str) -> Result<CanonicalValue> {
    let rule = RESISTOR_RULES
        .iter()
        .find(|rule| rule.matches(raw))
        .ok_or_else(|| unrecognized(raw))?;
    let number = rule
        .strip(raw)
        .and_then(|number| parse_decimal(&number))
        .ok_or_else(|| invalid_number(raw))?;
    let magnitude = rule.rounding.apply(number * rule.multiplier);
    canonical(raw, magnitude)
}

/// Normalize a capacitor value ("100pF", "4.7n", "1uF") to farads.
///
/// Text after the suffix is ignored ("10uF 25V") unless it continues the
/// number ("4n7"), which is rejected.
pub fn normalize_capacitor(raw: &str) -> Result<CanonicalValue> {
    let (rule, number, rest) = CAPACITOR_RULES
        .iter()
        .find_map(|rule| rule.split(raw).map(|(number, rest)| (rule, number, rest)))
        .ok_or_else(|| unrecognized(raw))?;
    if rest.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
        return Err(invalid_number(raw));
    }
    let number = parse_decimal(number).ok_or_else(|| invalid_number(raw))?;
    canonical(raw, number * rule.multiplier)
}

fn canonical(raw: &str, magnitude: f64) -> Result<CanonicalValue> {
    CanonicalValue::from_magnitude(magnitude).ok_or_else(|| NormalizeError::ValueOutOfRange {
        raw: raw.to_string(),
        rendered: render_fixed(magnitude),
    })
}

fn unrecognized(raw: &str) -> NormalizeError {
    NormalizeError::UnrecognizedUnit {
        raw: raw.to_string(),
    }
}

fn invalid_number(raw: &str) -> NormalizeError {
    NormalizeError::InvalidNumericFormat {
        raw: raw.to_string(),
    }
}
