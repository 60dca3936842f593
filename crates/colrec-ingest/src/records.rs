//! Structured-record input: a JSON array of flat objects.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use colrec_model::{LoadError, Record};

/// Loads an ordered list of flat records from a JSON file.
///
/// The first record's keys define the canonical field set downstream, so an
/// empty array is rejected here rather than failing obscurely later.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read,
/// [`LoadError::Records`] when it is not a JSON array of objects, and
/// [`LoadError::EmptyRecords`] when the array has no elements.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Records {
            path: path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        return Err(LoadError::EmptyRecords {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}
