//! Flat structured records loaded from a JSON source.

/// One structured record: an insertion-ordered map of field name to value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Canonical field set derived from a record list: the first record's keys
/// in file order. Later records are assumed to share this key set; missing
/// keys surface as nulls downstream rather than errors.
#[must_use]
pub fn canonical_fields(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}
