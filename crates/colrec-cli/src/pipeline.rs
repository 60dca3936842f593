//! Reconciliation pipelines with explicit stages.
//!
//! Both pipelines run load → match → render → write. Rendering completes in
//! memory before any byte is written, so a failed run leaves no partial
//! output.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, info_span};

use colrec_embed::EmbeddingProvider;
use colrec_ingest::{load_records, read_sheet_table};
use colrec_match::{MatchEngine, normalize};
use colrec_model::{MatchOutcome, Result};
use colrec_report::{
    generate_insert_script, project_records, write_spreadsheet, write_sql_script,
};

/// Inputs for a SQL-mode run.
#[derive(Debug, Clone)]
pub struct SqlRunConfig {
    /// Tabular input file (XLSX family or CSV).
    pub spreadsheet: PathBuf,
    /// Canonical database column names, as given on the command line.
    pub target_fields: Vec<String>,
    /// Destination table for the generated INSERT statements.
    pub table_name: String,
    /// Where to write the script.
    pub output: PathBuf,
}

/// Result of a SQL-mode run, for the summary layer.
#[derive(Debug)]
pub struct SqlRunReport {
    pub outcome: MatchOutcome,
    pub row_count: usize,
    pub output: PathBuf,
}

/// Reconciles a spreadsheet against database column names and writes an
/// INSERT script.
///
/// Target fields are folded to their normalized form up front: they become
/// SQL column names, so the emitted columns are the accent-free lowercase
/// labels.
///
/// # Errors
///
/// Returns the first load, matching, or output error; nothing is written
/// after a failure.
pub fn run_sql_pipeline(
    provider: &dyn EmbeddingProvider,
    config: &SqlRunConfig,
) -> Result<SqlRunReport> {
    let table = info_span!("load").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let table = read_sheet_table(&config.spreadsheet)?;
        info!(
            path = %config.spreadsheet.display(),
            columns = table.column_count(),
            rows = table.row_count(),
            duration_ms = start.elapsed().as_millis(),
            "input loaded"
        );
        Ok(table)
    })?;

    let target_fields: Vec<String> = config
        .target_fields
        .iter()
        .map(|field| normalize(field))
        .collect();

    let outcome = info_span!("match").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let outcome = MatchEngine::new(provider).align(&table.headers, &target_fields)?;
        info!(
            matched = outcome.matched_count(),
            unmatched = outcome.unmatched_count(),
            duration_ms = start.elapsed().as_millis(),
            "columns matched"
        );
        Ok(outcome)
    })?;

    let script = info_span!("render").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let script = generate_insert_script(&config.table_name, &table, &outcome)?;
        info!(
            table = %config.table_name,
            statements = table.row_count(),
            duration_ms = start.elapsed().as_millis(),
            "script rendered"
        );
        Ok(script)
    })?;

    info_span!("write").in_scope(|| -> Result<_> {
        let start = Instant::now();
        write_sql_script(&config.output, &script)?;
        info!(
            path = %config.output.display(),
            bytes = script.len(),
            duration_ms = start.elapsed().as_millis(),
            "script written"
        );
        Ok(())
    })?;

    Ok(SqlRunReport {
        outcome,
        row_count: table.row_count(),
        output: config.output.clone(),
    })
}

/// Inputs for a spreadsheet-mode run.
#[derive(Debug, Clone)]
pub struct SpreadsheetRunConfig {
    /// Spreadsheet whose headers name the output columns.
    pub spreadsheet: PathBuf,
    /// JSON file with the structured records to project.
    pub records: PathBuf,
    /// Where to write the re-shaped spreadsheet.
    pub output: PathBuf,
}

/// Result of a spreadsheet-mode run, for the summary layer.
#[derive(Debug)]
pub struct SpreadsheetRunReport {
    pub outcome: MatchOutcome,
    pub record_count: usize,
    pub output: PathBuf,
}

/// Matches spreadsheet headers against the keys of a structured record set
/// and writes a new spreadsheet of the matched fields, relabeled back to
/// the original headers. Unmatched headers are dropped in this mode.
///
/// # Errors
///
/// Returns the first load, matching, or output error; nothing is written
/// after a failure.
pub fn run_spreadsheet_pipeline(
    provider: &dyn EmbeddingProvider,
    config: &SpreadsheetRunConfig,
) -> Result<SpreadsheetRunReport> {
    let (table, records) = info_span!("load").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let table = read_sheet_table(&config.spreadsheet)?;
        let records = load_records(&config.records)?;
        info!(
            spreadsheet = %config.spreadsheet.display(),
            records_path = %config.records.display(),
            columns = table.column_count(),
            records = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "inputs loaded"
        );
        Ok((table, records))
    })?;

    // The first record's keys define the canonical field set.
    let target_fields = colrec_model::canonical_fields(&records);

    let outcome = info_span!("match").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let outcome = MatchEngine::new(provider).align(&table.headers, &target_fields)?;
        info!(
            matched = outcome.matched_count(),
            unmatched = outcome.unmatched_count(),
            duration_ms = start.elapsed().as_millis(),
            "columns matched"
        );
        Ok(outcome)
    })?;

    let (headers, rows) = project_records(&records, &outcome);

    info_span!("write").in_scope(|| -> Result<_> {
        let start = Instant::now();
        write_spreadsheet(&config.output, &headers, &rows)?;
        info!(
            path = %config.output.display(),
            columns = headers.len(),
            rows = rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "spreadsheet written"
        );
        Ok(())
    })?;

    Ok(SpreadsheetRunReport {
        outcome,
        record_count: records.len(),
        output: config.output.clone(),
    })
}
