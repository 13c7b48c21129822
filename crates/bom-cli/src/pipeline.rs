//! BOM sorting pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the header and every data row
//! 2. **Locate**: Find the name and value columns by exact header name
//! 3. **Normalize**: Classify each row and append the two sort-key columns
//! 4. **Sort**: Stable sort by (kind label, canonical value)
//! 5. **Output**: Write the quoted, tab-separated result
//!
//! Each stage completes before the next begins and the whole dataset stays in
//! memory. Nothing is written unless every earlier stage succeeded.

use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, info_span, trace, warn};

use bom_ingest::{BomTable, IngestError, read_bom_table};
use bom_normalize::{ComponentKind, NormalizeError, normalize};
use bom_output::{OutputError, write_sorted_bom};

use crate::types::{
    COMPONENT_SORTER_COLUMN, ColumnNames, KindCounts, RowErrorPolicy, SortOptions, SortOutcome,
    VALUE_SORTER_COLUMN,
};

/// A row whose value could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row} ({name}): {error}")]
pub struct RowError {
    /// 1-based data row index (the header is not counted).
    pub row: usize,
    /// Content of the name field.
    pub name: String,
    /// Content of the value field.
    pub raw: String,
    pub kind: ComponentKind,
    pub error: NormalizeError,
}

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Row(#[from] RowError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

// ============================================================================
// Rows
// ============================================================================

/// A data row with its two sort-key columns appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomRow {
    /// 1-based data row index in the input.
    pub index: usize,
    pub kind: ComponentKind,
    fields: Vec<String>,
}

impl BomRow {
    fn new(
        index: usize,
        kind: ComponentKind,
        mut fields: Vec<String>,
        keys: (String, String),
    ) -> Self {
        fields.push(keys.0);
        fields.push(keys.1);
        Self {
            index,
            kind,
            fields,
        }
    }

    /// All fields, including the appended sort keys.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The `(componentSorter, valueSorter)` pair.
    pub fn sort_key(&self) -> (&str, &str) {
        match self.fields.as_slice() {
            [.., kind, value] => (kind.as_str(), value.as_str()),
            _ => ("", ""),
        }
    }
}

impl AsRef<[String]> for BomRow {
    fn as_ref(&self) -> &[String] {
        &self.fields
    }
}

/// Column indices located in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortColumns {
    pub name: usize,
    pub value: usize,
}

/// Result of the normalize stage.
#[derive(Debug, Default)]
pub struct NormalizedRows {
    pub rows: Vec<BomRow>,
    pub counts: KindCounts,
    /// Rows kept with empty keys under [`RowErrorPolicy::Flag`].
    pub issues: Vec<RowError>,
}

/// A fully sorted BOM ready for output.
#[derive(Debug)]
pub struct SortedBom {
    /// Original header plus the two sort-key column names.
    pub headers: Vec<String>,
    pub rows: Vec<BomRow>,
    pub counts: KindCounts,
    pub issues: Vec<RowError>,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the BOM export into memory.
pub fn ingest(path: &Path) -> Result<BomTable, PipelineError> {
    let table = read_bom_table(path)?;
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "Loaded BOM"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Locate
// ============================================================================

/// Find the name and value columns; both must be present.
pub fn locate_columns(
    table: &BomTable,
    names: &ColumnNames,
) -> Result<SortColumns, PipelineError> {
    let columns = SortColumns {
        name: table.require_column(&names.name)?,
        value: table.require_column(&names.value)?,
    };
    debug!(
        name_column = columns.name,
        value_column = columns.value,
        "Located sort columns"
    );
    Ok(columns)
}

// ============================================================================
// Stage 3: Normalize
// ============================================================================

/// Classify every row and append its sort keys.
///
/// Resistor and capacitor rows get their kind label and canonical value;
/// other rows get two empty keys. A row that fails to normalize either aborts
/// the stage or, under [`RowErrorPolicy::Flag`], keeps empty keys and is
/// recorded as an issue.
pub fn normalize_rows(
    rows: Vec<Vec<String>>,
    columns: SortColumns,
    policy: RowErrorPolicy,
) -> Result<NormalizedRows, PipelineError> {
    let mut result = NormalizedRows {
        rows: Vec::with_capacity(rows.len()),
        ..NormalizedRows::default()
    };

    for (offset, fields) in rows.into_iter().enumerate() {
        let index = offset + 1;
        let name = field(&fields, columns.name);
        let raw = field(&fields, columns.value);
        let kind = ComponentKind::classify(name);
        result.counts.record(kind);

        let keys = match sort_keys(kind, raw) {
            Ok(keys) => keys,
            Err(error) => {
                let error = RowError {
                    row: index,
                    name: name.to_string(),
                    raw: raw.to_string(),
                    kind,
                    error,
                };
                match policy {
                    RowErrorPolicy::Abort => return Err(error.into()),
                    RowErrorPolicy::Flag => {
                        warn!(row = index, name = %error.name, raw = %error.raw, "{}", error.error);
                        result.issues.push(error);
                        (String::new(), String::new())
                    }
                }
            }
        };
        trace!(row = index, %kind, raw, value = %keys.1, "Normalized row");
        result.rows.push(BomRow::new(index, kind, fields, keys));
    }

    Ok(result)
}

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map_or("", String::as_str)
}

fn sort_keys(kind: ComponentKind, raw: &str) -> Result<(String, String), NormalizeError> {
    if !kind.is_sortable() {
        return Ok((String::new(), String::new()));
    }
    let (kind, value) = normalize(kind, raw)?;
    Ok((kind.label().to_string(), value.into_string()))
}

// ============================================================================
// Stage 4: Sort
// ============================================================================

/// Stable sort by `(componentSorter, valueSorter)` using plain string order.
///
/// Rows with empty keys come first, then "CAP", then "RES".
pub fn sort_rows(rows: &mut [BomRow]) {
    rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Run the locate, normalize and sort stages on an in-memory table.
pub fn sort_table(
    table: BomTable,
    names: &ColumnNames,
    policy: RowErrorPolicy,
) -> Result<SortedBom, PipelineError> {
    let columns = locate_columns(&table, names)?;
    let BomTable { headers, rows, .. } = table;

    let normalize_start = Instant::now();
    let mut normalized = info_span!("normalize", rows = rows.len())
        .in_scope(|| normalize_rows(rows, columns, policy))?;
    debug!(
        elapsed_ms = normalize_start.elapsed().as_millis(),
        resistors = normalized.counts.resistors,
        capacitors = normalized.counts.capacitors,
        other = normalized.counts.other,
        flagged = normalized.issues.len(),
        "Normalize stage complete"
    );

    let sort_start = Instant::now();
    info_span!("sort").in_scope(|| sort_rows(&mut normalized.rows));
    debug!(elapsed_ms = sort_start.elapsed().as_millis(), "Sort stage complete");

    let mut headers = headers.columns;
    headers.push(COMPONENT_SORTER_COLUMN.to_string());
    headers.push(VALUE_SORTER_COLUMN.to_string());

    Ok(SortedBom {
        headers,
        rows: normalized.rows,
        counts: normalized.counts,
        issues: normalized.issues,
    })
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Write the sorted BOM.
pub fn output(path: &Path, bom: &SortedBom) -> Result<(), PipelineError> {
    write_sorted_bom(path, &bom.headers, &bom.rows)?;
    info!(path = %path.display(), rows = bom.rows.len(), "Wrote sorted BOM");
    Ok(())
}

/// Run the whole pipeline for one input file.
pub fn run_sort(options: &SortOptions) -> Result<SortOutcome, PipelineError> {
    let span = info_span!("sort_bom", input = %options.input.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let table = info_span!("ingest").in_scope(|| ingest(&options.input))?;
    debug!(elapsed_ms = ingest_start.elapsed().as_millis(), "Ingest stage complete");

    let bom = sort_table(table, &options.columns, options.on_row_error)?;

    let output_path = if options.dry_run {
        info!(path = %options.output.display(), "Dry run, output not written");
        None
    } else {
        info_span!("output").in_scope(|| output(&options.output, &bom))?;
        Some(options.output.clone())
    };

    Ok(SortOutcome {
        input: options.input.clone(),
        output: output_path,
        counts: bom.counts,
        issues: bom.issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_ingest::BomHeaders;

    fn table(rows: &[[&str; 3]]) -> BomTable {
        BomTable::new(
            Path::new("test.csv"),
            BomHeaders::from_fields(["RefDes", "Name", "Value"]),
            rows.iter()
                .map(|row| row.iter().map(|field| (*field).to_string()).collect())
                .collect(),
        )
    }

    fn order(bom: &SortedBom) -> Vec<&str> {
        bom.rows.iter().map(|row| row.fields()[0].as_str()).collect()
    }

    #[test]
    fn test_sort_key_of_row() {
        let row = BomRow::new(
            1,
            ComponentKind::Resistor,
            vec!["R1".to_string()],
            ("RES".to_string(), "0001".to_string()),
        );
        assert_eq!(row.sort_key(), ("RES", "0001"));
        assert_eq!(row.fields().len(), 3);
    }

    #[test]
    fn test_scenario_groups_cap_before_res() {
        let bom = sort_table(
            table(&[
                ["R1", "RES1", "10k"],
                ["R2", "RES2", "4.7M"],
                ["C1", "CAP1", "100pF"],
                ["C2", "CAP2", "1u"],
            ]),
            &ColumnNames::default(),
            RowErrorPolicy::Abort,
        )
        .unwrap();
        assert_eq!(order(&bom), vec!["C1", "C2", "R1", "R2"]);
        assert_eq!(bom.counts.resistors, 2);
        assert_eq!(bom.counts.capacitors, 2);
    }

    #[test]
    fn test_other_rows_sort_first_with_empty_keys() {
        let bom = sort_table(
            table(&[["R1", "RES1", "10k"], ["U1", "ATMEGA", "x"], ["C1", "CAP1", "1n"]]),
            &ColumnNames::default(),
            RowErrorPolicy::Abort,
        )
        .unwrap();
        assert_eq!(order(&bom), vec!["U1", "C1", "R1"]);
        assert_eq!(bom.rows[0].sort_key(), ("", ""));
    }

    #[test]
    fn test_headers_gain_sorter_columns() {
        let bom = sort_table(table(&[]), &ColumnNames::default(), RowErrorPolicy::Abort).unwrap();
        assert_eq!(
            bom.headers,
            vec!["RefDes", "Name", "Value", "componentSorter", "valueSorter"]
        );
        assert!(bom.rows.is_empty());
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let bom = sort_table(
            table(&[["R1", "RES", "10k"], ["R2", "RES", "10K"], ["R3", "RES", "10000R"]]),
            &ColumnNames::default(),
            RowErrorPolicy::Abort,
        )
        .unwrap();
        assert_eq!(order(&bom), vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_abort_reports_row_index() {
        let err = sort_table(
            table(&[["R1", "RES1", "10k"], ["R2", "RES2", "10xyz"]]),
            &ColumnNames::default(),
            RowErrorPolicy::Abort,
        )
        .unwrap_err();
        let PipelineError::Row(row_error) = err else {
            panic!("expected a row error");
        };
        assert_eq!(row_error.row, 2);
        assert_eq!(row_error.raw, "10xyz");
        assert!(matches!(row_error.error, NormalizeError::UnrecognizedUnit { .. }));
        assert_eq!(
            row_error.to_string(),
            "row 2 (RES2): unrecognized unit in value '10xyz'"
        );
    }

    #[test]
    fn test_flag_keeps_row_with_empty_keys() {
        let bom = sort_table(
            table(&[["R1", "RES1", "10k"], ["R2", "RES2", "abc"]]),
            &ColumnNames::default(),
            RowErrorPolicy::Flag,
        )
        .unwrap();
        assert_eq!(order(&bom), vec!["R2", "R1"]);
        assert_eq!(bom.issues.len(), 1);
        assert_eq!(bom.issues[0].row, 2);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut names = ColumnNames::default();
        names.value = "Val".to_string();
        let err = sort_table(table(&[["R1", "RES1", "10k"]]), &names, RowErrorPolicy::Flag)
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Ingest(IngestError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let bom = sort_table(
            table(&[
                ["C2", "CAP", "1u"],
                ["U1", "LED", ""],
                ["R1", "RES", "220R"],
                ["C1", "CAP", "47p"],
            ]),
            &ColumnNames::default(),
            RowErrorPolicy::Abort,
        )
        .unwrap();
        let mut resorted = bom.rows.clone();
        sort_rows(&mut resorted);
        assert_eq!(resorted, bom.rows);
    }
}
