//! Engineering-notation value normalization for bill-of-materials sorting.
//!
//! Component values in a BOM are written in shorthand ("10k", "4.7nF", "1u").
//! This crate turns such a value into a [`CanonicalValue`]: the magnitude in
//! base SI units, rendered as a fixed-width zero-padded decimal string so that
//! plain string comparison orders values by magnitude.
//!
//! # Example
//!
//! ```
//! use bom_normalize::{ComponentKind, normalize};
//!
//! let (kind, value) = normalize(ComponentKind::Resistor, "10k").unwrap();
//! assert_eq!(kind.label(), "RES");
//! assert_eq!(value.as_str(), "00000010000.000000000000");
//! ```

mod canonical;
mod error;
mod kind;
mod normalize;
mod numeric;
mod rules;

// === Error Types ===
pub use error::{NormalizeError, Result};

// === Core Types ===
pub use canonical::{CANONICAL_WIDTH, CanonicalValue, FRACTION_DIGITS};
pub use kind::ComponentKind;

// === Normalization ===
pub use normalize::{normalize, normalize_capacitor, normalize_resistor};
pub use numeric::parse_decimal;
pub use rules::{CAPACITOR_RULES, CapacitorRule, RESISTOR_RULES, ResistorRule, Rounding};
