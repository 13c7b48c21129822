use std::path::{Path, PathBuf};

use serde::Serialize;

use bom_normalize::ComponentKind;

use crate::pipeline::RowError;

/// Header appended for the component kind sort key.
pub const COMPONENT_SORTER_COLUMN: &str = "componentSorter";

/// Header appended for the canonical value sort key.
pub const VALUE_SORTER_COLUMN: &str = "valueSorter";

/// Header names of the two columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub name: String,
    pub value: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            value: "Value".to_string(),
        }
    }
}

/// What to do with a row whose value cannot be normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowErrorPolicy {
    /// Stop at the first failing row; nothing is written.
    #[default]
    Abort,
    /// Keep the row with empty sort keys, record the issue, and continue.
    Flag,
}

/// Options for one sort run.
#[derive(Debug, Clone)]
pub struct SortOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: ColumnNames,
    pub on_row_error: RowErrorPolicy,
    /// Run every stage except writing the output file.
    pub dry_run: bool,
}

impl SortOptions {
    /// Options with defaults for everything but the input path.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        Self {
            input,
            output,
            columns: ColumnNames::default(),
            on_row_error: RowErrorPolicy::default(),
            dry_run: false,
        }
    }
}

/// `<dir>/<stem>.sorted.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "bom".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}.sorted.csv"))
}

/// Row counts per component kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub resistors: usize,
    pub capacitors: usize,
    pub other: usize,
}

impl KindCounts {
    pub fn record(&mut self, kind: ComponentKind) {
        match kind {
            ComponentKind::Resistor => self.resistors += 1,
            ComponentKind::Capacitor => self.capacitors += 1,
            ComponentKind::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.resistors + self.capacitors + self.other
    }
}

/// Result of a completed sort run.
#[derive(Debug)]
pub struct SortOutcome {
    pub input: PathBuf,
    /// Output file, or `None` for a dry run.
    pub output: Option<PathBuf>,
    pub counts: KindCounts,
    /// Rows flagged under [`RowErrorPolicy::Flag`].
    pub issues: Vec<RowError>,
}

impl SortOutcome {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }

    /// One-line failure message for a run that flagged rows.
    pub fn error_summary(&self) -> Option<String> {
        self.has_errors()
            .then(|| format!("{} row(s) flagged", self.issues.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_normalize::NormalizeError;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/boards/rev2/bom.csv")),
            PathBuf::from("/boards/rev2/bom.sorted.csv")
        );
        assert_eq!(
            default_output_path(Path::new("Example BOM.csv")),
            PathBuf::from("Example BOM.sorted.csv")
        );
    }

    #[test]
    fn test_kind_counts() {
        let mut counts = KindCounts::default();
        counts.record(ComponentKind::Resistor);
        counts.record(ComponentKind::Resistor);
        counts.record(ComponentKind::Other);
        assert_eq!(counts.resistors, 2);
        assert_eq!(counts.capacitors, 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_error_summary() {
        let mut outcome = SortOutcome {
            input: PathBuf::from("bom.csv"),
            output: None,
            counts: KindCounts::default(),
            issues: Vec::new(),
        };
        assert_eq!(outcome.error_summary(), None);

        let issue = RowError {
            row: 3,
            name: "R7".to_string(),
            raw: "4k7".to_string(),
            kind: ComponentKind::Resistor,
            error: NormalizeError::InvalidNumericFormat {
                raw: "4k7".to_string(),
            },
        };
        outcome.issues = vec![issue.clone(), issue];
        assert_eq!(outcome.error_summary().as_deref(), Some("2 row(s) flagged"));
    }
}
