//! Header row parsing and normalization.

/// Column names taken from the header row, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomHeaders {
    /// Normalized column names.
    pub columns: Vec<String>,
}

impl BomHeaders {
    /// Builds headers from raw header fields, normalizing each one.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            columns: fields.into_iter().map(normalize_header).collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if no column has a name.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|c| c.trim().is_empty())
    }

    /// Index of the column with exactly this name.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

/// Normalizes a header value: strips a leading UTF-8 BOM.
///
/// Whitespace is kept, so column lookup stays exact.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields() {
        let headers = BomHeaders::from_fields(["\u{feff}Name", "Value", "Qty"]);
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.columns, vec!["Name", "Value", "Qty"]);
    }

    #[test]
    fn test_position_is_exact() {
        let headers = BomHeaders::from_fields(["Name", "Value"]);
        assert_eq!(headers.position("Value"), Some(1));
        assert_eq!(headers.position("value"), None);
        assert_eq!(headers.position("Val"), None);
    }

    #[test]
    fn test_position_keeps_whitespace() {
        let headers = BomHeaders::from_fields([" Name ", "Value "]);
        assert_eq!(headers.position("Name"), None);
        assert_eq!(headers.position("Value"), None);
        assert_eq!(headers.position(" Name "), Some(0));
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}Name"), "Name");
        assert_eq!(normalize_header("  Value  "), "  Value  ");
    }

    #[test]
    fn test_blank() {
        assert!(BomHeaders::from_fields(["", " "]).is_blank());
        assert!(!BomHeaders::from_fields(["", "Name"]).is_blank());
    }
}
