use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single typed cell read from tabular input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Missing,
}

impl CellValue {
    /// Textual form used when a cell becomes a SQL literal.
    ///
    /// Whole floats keep one decimal place so `5.0` stays distinguishable
    /// from the integer `5`; booleans render as `True`/`False`.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 {
                    format!("{value:.1}")
                } else {
                    value.to_string()
                }
            }
            Self::Bool(true) => "True".to_string(),
            Self::Bool(false) => "False".to_string(),
            Self::DateTime(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Missing => String::new(),
        }
    }

    /// JSON-safe value for serializing leftover columns.
    ///
    /// Datetimes and non-finite floats are coerced to their rendered string
    /// form so the result is always valid JSON.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Text(text) => serde_json::Value::String(text.clone()),
            Self::Integer(value) => serde_json::Value::Number((*value).into()),
            Self::Float(value) => match serde_json::Number::from_f64(*value) {
                Some(number) => serde_json::Value::Number(number),
                None => serde_json::Value::String(self.render()),
            },
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::DateTime(_) => serde_json::Value::String(self.render()),
            Self::Missing => serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// A positional table: headers from the first input row, one cell vector
/// per data row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Index of the first column with the given header, if any.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell at the given position. Out-of-range coordinates read as
    /// [`CellValue::Missing`], which covers ragged rows.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&CellValue::Missing)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
