//! JSON run report.

use std::path::Path;

use anyhow::{Result, anyhow};
use serde::Serialize;

use bom_normalize::ComponentKind;
use bom_output::write_atomic;

use crate::types::{KindCounts, SortOutcome};

pub const REPORT_SCHEMA: &str = "bom-sort.run-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub input: String,
    pub output: Option<String>,
    pub rows: usize,
    pub counts: KindCounts,
    pub issues: Vec<RowIssueJson<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RowIssueJson<'a> {
    pub row: usize,
    pub name: &'a str,
    pub value: &'a str,
    pub kind: ComponentKind,
    pub code: &'static str,
    pub message: String,
}

pub fn build_run_report(outcome: &SortOutcome) -> RunReport<'_> {
    RunReport {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        input: outcome.input.display().to_string(),
        output: outcome
            .output
            .as_ref()
            .map(|path| path.display().to_string()),
        rows: outcome.counts.total(),
        counts: outcome.counts,
        issues: outcome
            .issues
            .iter()
            .map(|issue| RowIssueJson {
                row: issue.row,
                name: &issue.name,
                value: &issue.raw,
                kind: issue.kind,
                code: issue.error.code(),
                message: issue.error.to_string(),
            })
            .collect(),
    }
}

/// Write the run report as pretty-printed JSON.
pub fn write_run_report(path: &Path, outcome: &SortOutcome) -> Result<()> {
    let report = build_run_report(outcome);
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| anyhow!("failed to serialize run report: {e}"))?;
    write_atomic(path, format!("{json}\n").as_bytes())
        .map_err(|e| anyhow!("failed to write run report {}: {e}", path.display()))?;
    Ok(())
}
