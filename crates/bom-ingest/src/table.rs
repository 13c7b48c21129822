//! In-memory BOM table.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::export::BomHeaders;

/// A loaded BOM: the header row plus every data row as string fields.
///
/// Data rows are padded with empty fields up to the header width, so every
/// column index valid for the header is valid for every row.
#[derive(Debug, Clone)]
pub struct BomTable {
    /// File the table was read from (used in error messages).
    pub path: PathBuf,
    pub headers: BomHeaders,
    pub rows: Vec<Vec<String>>,
}

impl BomTable {
    pub fn new(path: &Path, headers: BomHeaders, rows: Vec<Vec<String>>) -> Self {
        Self {
            path: path.to_path_buf(),
            headers,
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column with exactly this header name.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.position(column)
    }

    /// Index of a column that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingColumn`] if no header matches exactly.
    pub fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| IngestError::MissingColumn {
                column: column.to_string(),
                path: self.path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> BomTable {
        BomTable::new(
            Path::new("bom.csv"),
            BomHeaders::from_fields(["RefDes", "Name", "Value"]),
            vec![vec!["R1".into(), "RES".into(), "10k".into()]],
        )
    }

    #[test]
    fn test_require_column() {
        let table = sample_table();
        assert_eq!(table.require_column("Name").unwrap(), 1);
        assert_eq!(table.require_column("Value").unwrap(), 2);
    }

    #[test]
    fn test_require_missing_column() {
        let table = sample_table();
        let err = table.require_column("Footprint").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { ref column, .. } if column == "Footprint"
        ));
    }

    #[test]
    fn test_len() {
        let table = sample_table();
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
