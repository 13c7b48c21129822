//! CLI argument definitions for the BOM sorter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bom-sort",
    version,
    about = "Sort a PCB bill of materials by component kind and true value",
    long_about = "Sort a bill of materials exported from a PCB design tool.\n\n\
                  Resistor and capacitor values written in engineering shorthand \
                  (10k, 4.7nF, 1u) are converted to base units so rows sort by \
                  magnitude instead of by text."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort a BOM export and write the result.
    Sort(SortArgs),

    /// Print the canonical sort value for one or more component values.
    Parse(ParseArgs),
}

#[derive(Parser)]
pub struct SortArgs {
    /// Comma-separated BOM export to sort.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>.sorted.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Header of the column holding the component name.
    #[arg(long = "name-column", value_name = "HEADER", default_value = "Name")]
    pub name_column: String,

    /// Header of the column holding the component value.
    #[arg(long = "value-column", value_name = "HEADER", default_value = "Value")]
    pub value_column: String,

    /// What to do with a resistor or capacitor value that cannot be parsed.
    ///
    /// `abort` stops without writing anything. `flag` keeps the row with
    /// empty sort keys, reports it, and exits non-zero after writing.
    #[arg(long = "on-row-error", value_enum, default_value = "abort")]
    pub on_row_error: RowErrorPolicyArg,

    /// Run every stage but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Component kind the values belong to.
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Values in engineering shorthand, e.g. 10k or 4.7nF.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RowErrorPolicyArg {
    Abort,
    Flag,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    #[value(alias = "res")]
    Resistor,
    #[value(alias = "cap")]
    Capacitor,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sort_defaults() {
        let cli = Cli::try_parse_from(["bom-sort", "sort", "bom.csv"]).unwrap();
        let Command::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(args.input, PathBuf::from("bom.csv"));
        assert_eq!(args.name_column, "Name");
        assert_eq!(args.value_column, "Value");
        assert!(matches!(args.on_row_error, RowErrorPolicyArg::Abort));
        assert!(args.output.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_global_log_flags() {
        let cli = Cli::try_parse_from(["bom-sort", "sort", "bom.csv"]).unwrap();
        assert!(!cli.log_timestamps);
        assert!(cli.log_file.is_none());

        let cli = Cli::try_parse_from([
            "bom-sort",
            "sort",
            "bom.csv",
            "--log-timestamps",
            "--log-file",
            "sort.log",
        ])
        .unwrap();
        assert!(cli.log_timestamps);
        assert_eq!(cli.log_file, Some(PathBuf::from("sort.log")));
    }

    #[test]
    fn test_parse_command_requires_values() {
        assert!(Cli::try_parse_from(["bom-sort", "parse", "res"]).is_err());
        assert!(Cli::try_parse_from(["bom-sort", "parse", "cap", "100nF"]).is_ok());
    }
}
