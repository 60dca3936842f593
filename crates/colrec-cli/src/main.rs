//! Column reconciliation CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use colrec_cli::exit_codes::EXIT_ERROR;
use colrec_cli::logging::{LogConfig, LogFormat, init_logging};
use colrec_embed::HashEmbedder;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_generate_sql, run_generate_spreadsheet};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("Error: failed to initialize logging: {error}");
        std::process::exit(i32::from(EXIT_ERROR));
    }
    let provider = HashEmbedder::new();
    let exit_code = match cli.command {
        Command::GenerateSql(args) => run_generate_sql(&provider, args),
        Command::GenerateSpreadsheet(args) => run_generate_spreadsheet(&provider, args),
    };
    std::process::exit(i32::from(exit_code));
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
