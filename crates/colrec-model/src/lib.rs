//! Shared data model for the column reconciliation toolkit.

pub mod error;
pub mod matching;
pub mod record;
pub mod table;

pub use error::{ColrecError, EmbedError, LoadError, MatchError, OutputError, Result};
pub use matching::{ColumnAssignment, MatchOutcome};
pub use record::{Record, canonical_fields};
pub use table::{CellValue, SheetTable};
