//! Console summary of a match outcome.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colrec_model::MatchOutcome;

/// Prints the per-column reconciliation table: matched pairs with their
/// similarity, then unmatched columns.
pub fn print_match_summary(outcome: &MatchOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source Column"),
        header_cell("Target Field"),
        header_cell("Similarity"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for assignment in &outcome.assignments {
        table.add_row(vec![
            Cell::new(&assignment.source_column),
            Cell::new(&assignment.target_field).fg(Color::Green),
            Cell::new(format!("{:.3}", assignment.similarity)),
        ]);
    }
    for column in &outcome.unmatched_columns {
        table.add_row(vec![
            Cell::new(column),
            Cell::new("unmatched")
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
        ]);
    }

    println!("{table}");
    println!(
        "Matched {} of {} columns",
        outcome.matched_count(),
        outcome.matched_count() + outcome.unmatched_count()
    );
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
