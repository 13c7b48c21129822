//! Error types for value normalization.

use thiserror::Error;

/// Errors that can occur while normalizing a component value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The value carries none of the unit suffixes known for its kind.
    #[error("unrecognized unit in value '{raw}'")]
    UnrecognizedUnit { raw: String },

    /// A suffix matched but the remaining text is not a plain decimal number.
    #[error("invalid numeric format in value '{raw}'")]
    InvalidNumericFormat { raw: String },

    /// The scaled magnitude does not fit the canonical field width.
    #[error("value '{raw}' ({rendered}) does not fit the canonical width")]
    ValueOutOfRange { raw: String, rendered: String },

    /// Only resistors and capacitors have sortable values.
    #[error("component kind has no sortable value")]
    UnsortableKind,
}

impl NormalizeError {
    /// Stable identifier for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnrecognizedUnit { .. } => "UnrecognizedUnit",
            Self::InvalidNumericFormat { .. } => "InvalidNumericFormat",
            Self::ValueOutOfRange { .. } => "ValueOutOfRange",
            Self::UnsortableKind => "UnsortableKind",
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::UnrecognizedUnit {
            raw: "10xyz".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized unit in value '10xyz'");
        assert_eq!(err.code(), "UnrecognizedUnit");
    }
}
