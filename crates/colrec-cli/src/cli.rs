//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colrec",
    version,
    about = "Reconcile spreadsheet columns against canonical field names",
    long_about = "Reconcile heterogeneous spreadsheet headers against a canonical\n\
                  set of field names using semantic similarity, then generate a\n\
                  SQL insertion script or a re-shaped spreadsheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Match spreadsheet columns to database columns and emit an INSERT script.
    GenerateSql(GenerateSqlArgs),

    /// Match spreadsheet columns to a JSON record set and emit a new spreadsheet.
    GenerateSpreadsheet(GenerateSpreadsheetArgs),
}

#[derive(Parser)]
pub struct GenerateSqlArgs {
    /// Path to the spreadsheet file (XLSX family or CSV).
    #[arg(value_name = "SPREADSHEET")]
    pub spreadsheet: PathBuf,

    /// Comma-separated list of database column names.
    #[arg(value_name = "TARGET_FIELDS", value_parser = parse_target_fields)]
    pub target_fields: TargetFields,

    /// Name of the database table to insert into.
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Path to save the generated SQL script.
    #[arg(long = "output", value_name = "PATH", default_value = "output.sql")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct GenerateSpreadsheetArgs {
    /// Path to the spreadsheet whose headers name the output columns.
    #[arg(value_name = "SPREADSHEET")]
    pub spreadsheet: PathBuf,

    /// Path to a JSON file holding an array of flat records.
    #[arg(value_name = "RECORDS_JSON")]
    pub records: PathBuf,

    /// Path to save the generated spreadsheet.
    #[arg(
        long = "output_excel",
        value_name = "PATH",
        default_value = "output.xlsx"
    )]
    pub output_excel: PathBuf,
}

/// Parsed, non-empty target field list.
#[derive(Debug, Clone)]
pub struct TargetFields(pub Vec<String>);

fn parse_target_fields(raw: &str) -> Result<TargetFields, String> {
    let fields: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(String::from)
        .collect();
    if fields.is_empty() {
        Err("target field list is empty".to_string())
    } else {
        Ok(TargetFields(fields))
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
