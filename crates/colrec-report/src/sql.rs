//! SQL insertion script generation.
//!
//! All statement text is built here: one `INSERT INTO <table> (...) VALUES
//! (...);` per data row, every value a single-quoted literal with embedded
//! quotes doubled, identifiers validated up front. Unmatched columns travel
//! in a trailing `other_information` JSON object so their data survives the
//! projection.

use std::fs;
use std::path::Path;

use tracing::debug;

use colrec_model::{CellValue, MatchOutcome, OutputError, SheetTable};

/// Synthetic column carrying the serialized unmatched cells of each row.
pub const OTHER_INFORMATION: &str = "other_information";

/// Renders the full insertion script for a reconciled sheet.
///
/// Columns are the matched target fields in source order, then
/// [`OTHER_INFORMATION`], which is always present; rows with no unmatched
/// data carry `'{}'`. Statements are newline-joined with no trailing
/// newline.
///
/// # Errors
///
/// Returns [`OutputError::InvalidIdentifier`] when the table or a target
/// field is not a bare SQL identifier, and [`OutputError::UnknownColumn`]
/// when the match outcome references a header absent from the sheet.
pub fn generate_insert_script(
    table_name: &str,
    table: &SheetTable,
    outcome: &MatchOutcome,
) -> Result<String, OutputError> {
    validate_identifier(table_name)?;
    for assignment in &outcome.assignments {
        validate_identifier(&assignment.target_field)?;
    }

    let matched_indices = column_indices(
        table,
        outcome.assignments.iter().map(|a| a.source_column.as_str()),
    )?;
    let unmatched_indices = column_indices(
        table,
        outcome.unmatched_columns.iter().map(String::as_str),
    )?;

    let mut columns: Vec<&str> = outcome
        .assignments
        .iter()
        .map(|assignment| assignment.target_field.as_str())
        .collect();
    columns.push(OTHER_INFORMATION);
    let column_list = columns.join(", ");

    let mut statements = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let mut values = Vec::with_capacity(columns.len());
        for col in &matched_indices {
            values.push(quote_literal(&table.cell(row, *col).render()));
        }
        let leftover = leftover_json(table, row, &outcome.unmatched_columns, &unmatched_indices);
        values.push(quote_literal(&leftover));
        statements.push(format!(
            "INSERT INTO {table_name} ({column_list}) VALUES ({});",
            values.join(", ")
        ));
    }

    debug!(
        table = table_name,
        statements = statements.len(),
        "insert script rendered"
    );
    Ok(statements.join("\n"))
}

/// Writes a fully rendered script in one shot, so a failure leaves no
/// partial output.
///
/// # Errors
///
/// Returns [`OutputError::Io`] when the file cannot be written.
pub fn write_sql_script(path: &Path, script: &str) -> Result<(), OutputError> {
    fs::write(path, script).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Single-quoted SQL string literal with embedded quotes doubled.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn validate_identifier(name: &str) -> Result<(), OutputError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(OutputError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

fn column_indices<'a>(
    table: &SheetTable,
    names: impl Iterator<Item = &'a str>,
) -> Result<Vec<usize>, OutputError> {
    names
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| OutputError::UnknownColumn {
                    name: name.to_string(),
                })
        })
        .collect()
}

/// JSON object of unmatched column values for one row, rendered with the
/// `", "` / `": "` separators downstream consumers expect
/// (`{"xyz123": 5}`, not `{"xyz123":5}`).
fn leftover_json(
    table: &SheetTable,
    row: usize,
    unmatched_columns: &[String],
    unmatched_indices: &[usize],
) -> String {
    let mut entries = Vec::with_capacity(unmatched_columns.len());
    for (name, col) in unmatched_columns.iter().zip(unmatched_indices) {
        let key = serde_json::Value::String(name.clone());
        let value = table.cell(row, *col).to_json();
        entries.push(format!("{key}: {value}"));
    }
    format!("{{{}}}", entries.join(", "))
}
