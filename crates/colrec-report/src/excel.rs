//! Spreadsheet output: matched fields from structured records, relabeled
//! back to the original spreadsheet headers.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use serde_json::Value;
use tracing::debug;

use colrec_model::{MatchOutcome, OutputError, Record};

/// Projects structured records onto the matched columns.
///
/// Output headers are the assignments' original spreadsheet labels (the
/// inverse rename), in source order; each record becomes one row of the
/// corresponding canonical-field values, with missing keys as null.
/// Unmatched spreadsheet columns do not appear at all.
#[must_use]
pub fn project_records(
    records: &[Record],
    outcome: &MatchOutcome,
) -> (Vec<String>, Vec<Vec<Value>>) {
    let headers: Vec<String> = outcome
        .assignments
        .iter()
        .map(|assignment| assignment.source_column.clone())
        .collect();
    let rows = records
        .iter()
        .map(|record| {
            outcome
                .assignments
                .iter()
                .map(|assignment| {
                    record
                        .get(&assignment.target_field)
                        .cloned()
                        .unwrap_or(Value::Null)
                })
                .collect()
        })
        .collect();
    (headers, rows)
}

/// Writes a header row plus data rows to a new XLSX workbook.
///
/// Strings, numbers, and booleans keep their types; nulls stay empty;
/// anything structured is written as its compact JSON text.
///
/// # Errors
///
/// Returns [`OutputError::Excel`] when the workbook cannot be built or
/// saved.
pub fn write_spreadsheet(
    path: &Path,
    headers: &[String],
    rows: &[Vec<Value>],
) -> Result<(), OutputError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .map_err(excel_error)?;
    }
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                Value::Null => {}
                Value::Bool(flag) => {
                    worksheet
                        .write_boolean(row_num, col, *flag)
                        .map_err(excel_error)?;
                }
                Value::Number(number) => {
                    // Excel cells are f64; i64/u64 values beyond 2^53 lose
                    // precision the same way they would in any spreadsheet.
                    let numeric = number.as_f64().unwrap_or(f64::NAN);
                    worksheet
                        .write_number(row_num, col, numeric)
                        .map_err(excel_error)?;
                }
                Value::String(text) => {
                    worksheet
                        .write_string(row_num, col, text)
                        .map_err(excel_error)?;
                }
                structured @ (Value::Array(_) | Value::Object(_)) => {
                    worksheet
                        .write_string(row_num, col, structured.to_string())
                        .map_err(excel_error)?;
                }
            }
        }
    }

    workbook.save(path).map_err(excel_error)?;
    debug!(path = %path.display(), rows = rows.len(), "spreadsheet written");
    Ok(())
}

fn excel_error(error: rust_xlsxwriter::XlsxError) -> OutputError {
    OutputError::Excel {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colrec_model::ColumnAssignment;
    use serde_json::json;

    fn outcome() -> MatchOutcome {
        MatchOutcome {
            assignments: vec![
                ColumnAssignment {
                    source_column: "Référence".to_string(),
                    target_field: "reference".to_string(),
                    similarity: 0.99,
                },
                ColumnAssignment {
                    source_column: "Montant Total".to_string(),
                    target_field: "montant".to_string(),
                    similarity: 0.88,
                },
            ],
            unmatched_columns: vec!["Code Barre".to_string()],
        }
    }

    #[test]
    fn projection_relabels_and_drops_unmatched() {
        let records: Vec<Record> = vec![
            json!({"reference": "A1", "montant": 10, "extra": true})
                .as_object()
                .unwrap()
                .clone(),
            json!({"reference": "B2"}).as_object().unwrap().clone(),
        ];
        let (headers, rows) = project_records(&records, &outcome());

        assert_eq!(headers, vec!["Référence", "Montant Total"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![json!("A1"), json!(10)]);
        // Missing key in the second record reads as null.
        assert_eq!(rows[1], vec![json!("B2"), Value::Null]);
    }

    #[test]
    fn projection_of_no_records_is_empty() {
        let (headers, rows) = project_records(&[], &outcome());
        assert_eq!(headers.len(), 2);
        assert!(rows.is_empty());
    }
}
