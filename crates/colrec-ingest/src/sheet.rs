//! Tabular input loading, dispatched on file extension.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use tracing::debug;

use colrec_model::{CellValue, LoadError, SheetTable};

/// Header hygiene applied to every label from the first row: trim, strip a
/// UTF-8 BOM, collapse internal whitespace runs to single spaces.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a tabular file into a [`SheetTable`]: first row as headers, one
/// typed cell vector per data row.
///
/// XLSX/XLSM/XLS/ODS go through calamine (first worksheet only); CSV goes
/// through the csv crate with lenient cell typing. Anything else is an
/// [`LoadError::UnsupportedExtension`].
///
/// # Errors
///
/// Returns [`LoadError`] when the file is missing, unparseable, or contains
/// no rows at all. Headers with zero data rows are valid.
pub fn read_sheet_table(path: &Path) -> Result<SheetTable, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let table = match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => read_excel_table(path)?,
        "csv" => read_csv_table(path)?,
        _ => {
            return Err(LoadError::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        }
    };
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "sheet loaded"
    );
    Ok(table)
}

fn read_excel_table(path: &Path) -> Result<SheetTable, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|error| LoadError::Spreadsheet {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::EmptySheet {
            path: path.to_path_buf(),
        })?
        .map_err(|error| LoadError::Spreadsheet {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(LoadError::EmptySheet {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&data_to_text(cell)))
        .collect();

    let mut table = SheetTable::new(headers);
    for row in rows {
        let mut cells = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            let cell = row.get(idx).unwrap_or(&Data::Empty);
            cells.push(convert_excel_cell(cell));
        }
        table.push_row(cells);
    }
    Ok(table)
}

fn data_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn convert_excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(text) => {
            if text.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(text.clone())
            }
        }
        Data::Float(value) => float_cell(*value),
        Data::Int(value) => CellValue::Integer(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(stamp) => match stamp.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            // Serial value calamine could not place on the calendar.
            None => float_cell(stamp.as_f64()),
        },
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(_) => CellValue::Missing,
    }
}

fn float_cell(value: f64) -> CellValue {
    const I64_RANGE: f64 = 9.007_199_254_740_992e15; // 2^53, exact in f64
    if value.fract() == 0.0 && value.abs() < I64_RANGE {
        CellValue::Integer(value as i64)
    } else {
        CellValue::Float(value)
    }
}

fn read_csv_table(path: &Path) -> Result<SheetTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_load_error(path, error))?;

    let mut records = reader.records();
    let Some(header_record) = records.next() else {
        return Err(LoadError::EmptySheet {
            path: path.to_path_buf(),
        });
    };
    let header_record = header_record.map_err(|error| csv_load_error(path, error))?;
    let headers: Vec<String> = header_record.iter().map(normalize_header).collect();

    let mut table = SheetTable::new(headers);
    for record in records {
        let record = record.map_err(|error| csv_load_error(path, error))?;
        let mut cells = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            cells.push(parse_csv_cell(record.get(idx).unwrap_or("")));
        }
        table.push_row(cells);
    }
    Ok(table)
}

fn csv_load_error(path: &Path, error: csv::Error) -> LoadError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::Spreadsheet {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Lenient CSV cell typing: integers, then floats, then text; empty cells
/// read as missing.
fn parse_csv_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return CellValue::Integer(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return CellValue::Float(value);
    }
    CellValue::Text(trimmed.to_string())
}
