use anyhow::Result;
use comfy_table::{Cell, Table};

use bom_cli::pipeline::run_sort;
use bom_cli::report::write_run_report;
use bom_cli::types::{ColumnNames, RowErrorPolicy, SortOptions, SortOutcome, default_output_path};
use bom_normalize::{ComponentKind, normalize};

use crate::cli::{KindArg, ParseArgs, RowErrorPolicyArg, SortArgs};
use crate::summary::{apply_table_style, error_cell, header_cell};

pub fn run_sort_command(args: &SortArgs) -> Result<SortOutcome> {
    let options = sort_options(args);
    let outcome = run_sort(&options)?;
    if let Some(path) = &args.report {
        write_run_report(path, &outcome)?;
    }
    Ok(outcome)
}

fn sort_options(args: &SortArgs) -> SortOptions {
    SortOptions {
        input: args.input.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input)),
        columns: ColumnNames {
            name: args.name_column.clone(),
            value: args.value_column.clone(),
        },
        on_row_error: match args.on_row_error {
            RowErrorPolicyArg::Abort => RowErrorPolicy::Abort,
            RowErrorPolicyArg::Flag => RowErrorPolicy::Flag,
        },
        dry_run: args.dry_run,
    }
}

/// Print canonical values; returns false if any value failed to parse.
pub fn run_parse(args: &ParseArgs) -> bool {
    let kind = match args.kind {
        KindArg::Resistor => ComponentKind::Resistor,
        KindArg::Capacitor => ComponentKind::Capacitor,
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value"), header_cell("Canonical")]);
    apply_table_style(&mut table);
    let mut all_ok = true;
    for value in &args.values {
        let canonical = match normalize(kind, value) {
            Ok((_, canonical)) => Cell::new(canonical),
            Err(error) => {
                all_ok = false;
                error_cell(error)
            }
        };
        table.add_row(vec![Cell::new(value), canonical]);
    }
    println!("{table}");
    all_ok
}
