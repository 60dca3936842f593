//! Subcommand execution: run a pipeline, print the summary, map errors to
//! exit codes.

use colrec_cli::exit_codes::{EXIT_SUCCESS, error_exit_code};
use colrec_cli::pipeline::{
    SpreadsheetRunConfig, SqlRunConfig, run_spreadsheet_pipeline, run_sql_pipeline,
};
use colrec_cli::summary::print_match_summary;
use colrec_embed::EmbeddingProvider;

use crate::cli::{GenerateSqlArgs, GenerateSpreadsheetArgs};

pub fn run_generate_sql(provider: &dyn EmbeddingProvider, args: GenerateSqlArgs) -> u8 {
    let config = SqlRunConfig {
        spreadsheet: args.spreadsheet,
        target_fields: args.target_fields.0,
        table_name: args.table,
        output: args.output,
    };
    match run_sql_pipeline(provider, &config) {
        Ok(report) => {
            print_match_summary(&report.outcome);
            println!(
                "SQL script generated successfully and saved to {}",
                report.output.display()
            );
            EXIT_SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            error_exit_code(&error)
        }
    }
}

pub fn run_generate_spreadsheet(
    provider: &dyn EmbeddingProvider,
    args: GenerateSpreadsheetArgs,
) -> u8 {
    let config = SpreadsheetRunConfig {
        spreadsheet: args.spreadsheet,
        records: args.records,
        output: args.output_excel,
    };
    match run_spreadsheet_pipeline(provider, &config) {
        Ok(report) => {
            print_match_summary(&report.outcome);
            println!(
                "Spreadsheet generated successfully and saved to {}",
                report.output.display()
            );
            EXIT_SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            error_exit_code(&error)
        }
    }
}
