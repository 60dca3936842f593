//! Round-trip tests for spreadsheet output.

use calamine::{Data, Reader, open_workbook_auto};
use serde_json::json;
use tempfile::TempDir;

use colrec_model::{ColumnAssignment, MatchOutcome, Record};
use colrec_report::{project_records, write_spreadsheet};

#[test]
fn matched_values_round_trip_through_xlsx() {
    let records: Vec<Record> = vec![
        json!({"reference": "A1", "montant": 10.5, "actif": true, "extra": "dropped"})
            .as_object()
            .unwrap()
            .clone(),
        json!({"reference": "B2", "montant": 7})
            .as_object()
            .unwrap()
            .clone(),
    ];
    let outcome = MatchOutcome {
        assignments: vec![
            ColumnAssignment {
                source_column: "Référence".to_string(),
                target_field: "reference".to_string(),
                similarity: 0.99,
            },
            ColumnAssignment {
                source_column: "Montant Total".to_string(),
                target_field: "montant".to_string(),
                similarity: 0.9,
            },
            ColumnAssignment {
                source_column: "Actif".to_string(),
                target_field: "actif".to_string(),
                similarity: 0.8,
            },
        ],
        unmatched_columns: vec!["Code Barre".to_string()],
    };

    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("out.xlsx");
    let (headers, rows) = project_records(&records, &outcome);
    write_spreadsheet(&path, &headers, &rows).expect("write spreadsheet");

    let mut workbook = open_workbook_auto(&path).expect("open output");
    let range = workbook
        .worksheet_range_at(0)
        .expect("first sheet")
        .expect("readable sheet");
    let cells: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();

    // Header row carries the original spreadsheet labels.
    assert_eq!(cells[0][0], Data::String("Référence".to_string()));
    assert_eq!(cells[0][1], Data::String("Montant Total".to_string()));
    assert_eq!(cells[0][2], Data::String("Actif".to_string()));
    assert_eq!(cells[0].len(), 3);

    // Values are preserved with their types.
    assert_eq!(cells[1][0], Data::String("A1".to_string()));
    assert_eq!(cells[1][1], Data::Float(10.5));
    assert_eq!(cells[1][2], Data::Bool(true));
    assert_eq!(cells[2][0], Data::String("B2".to_string()));
    assert_eq!(cells[2][1], Data::Float(7.0));
    // Missing key in the second record stays an empty cell.
    assert_eq!(cells[2][2], Data::Empty);
}

#[test]
fn structured_values_are_written_as_json_text() {
    let records: Vec<Record> = vec![
        json!({"tags": ["a", "b"]}).as_object().unwrap().clone(),
    ];
    let outcome = MatchOutcome {
        assignments: vec![ColumnAssignment {
            source_column: "Tags".to_string(),
            target_field: "tags".to_string(),
            similarity: 0.95,
        }],
        unmatched_columns: vec![],
    };

    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("out.xlsx");
    let (headers, rows) = project_records(&records, &outcome);
    write_spreadsheet(&path, &headers, &rows).expect("write spreadsheet");

    let mut workbook = open_workbook_auto(&path).expect("open output");
    let range = workbook
        .worksheet_range_at(0)
        .expect("first sheet")
        .expect("readable sheet");
    let cell = range.get_value((1, 0)).expect("data cell");
    assert_eq!(*cell, Data::String(r#"["a","b"]"#.to_string()));
}
