use serde::{Deserialize, Serialize};

/// One resolved source-column to target-field mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Original (raw) spreadsheet header.
    pub source_column: String,
    /// Original (raw) target field label.
    pub target_field: String,
    /// Cosine similarity of the pair's embeddings, in [-1, 1].
    pub similarity: f64,
}

/// Result of matching a header list against a canonical field set.
///
/// Every source header lands in exactly one of `assignments` or
/// `unmatched_columns`; both are in source header order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub assignments: Vec<ColumnAssignment>,
    pub unmatched_columns: Vec<String>,
}

impl MatchOutcome {
    /// The assignment for a source column, if it was matched.
    #[must_use]
    pub fn assignment_for(&self, source_column: &str) -> Option<&ColumnAssignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.source_column == source_column)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.unmatched_columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.unmatched_columns.is_empty()
    }
}
