//! Integration tests for loading BOM exports from disk.

use std::fs;

use tempfile::TempDir;

use bom_ingest::{IngestError, read_bom_table};

const DIPTRACE_EXPORT: &str = "\"Number\",\"RefDes\",\"Name\",\"Value\",\"Quantity\"\r\n\
\"1\",\"R1\",\"RES_0603\",\"10k\",\"1\"\r\n\
\"2\",\"C1\",\"CAP_0805\",\"100nF\",\"2\"\r\n\
\"3\",\"U1\",\"ATMEGA328P\",\"\",\"1\"\r\n";

#[test]
fn test_read_diptrace_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.csv");
    fs::write(&path, DIPTRACE_EXPORT).unwrap();

    let table = read_bom_table(&path).unwrap();

    assert_eq!(
        table.headers.columns,
        vec!["Number", "RefDes", "Name", "Value", "Quantity"]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows[1], vec!["2", "C1", "CAP_0805", "100nF", "2"]);
    assert_eq!(table.require_column("Name").unwrap(), 2);
    assert_eq!(table.require_column("Value").unwrap(), 3);
}

#[test]
fn test_missing_value_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.csv");
    fs::write(&path, "\"RefDes\",\"Name\"\n\"R1\",\"RES\"\n").unwrap();

    let table = read_bom_table(&path).unwrap();
    let err = table.require_column("Value").unwrap_err();

    assert!(matches!(err, IngestError::MissingColumn { .. }));
    assert!(err.to_string().contains("'Value'"));
}

#[test]
fn test_blank_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.csv");
    fs::write(&path, "Name,Value\n\nRES1,10k\n\n").unwrap();

    let table = read_bom_table(&path).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_header_lookup_is_exact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.csv");
    fs::write(&path, "\u{feff}Name, Value \nRES1,10k\n").unwrap();

    let table = read_bom_table(&path).unwrap();

    assert_eq!(table.require_column("Name").unwrap(), 0);
    let err = table.require_column("Value").unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { .. }));
}
