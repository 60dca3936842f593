//! Input loading: spreadsheets into [`colrec_model::SheetTable`] and JSON
//! record files into [`colrec_model::Record`] lists.

pub mod records;
pub mod sheet;

pub use records::load_records;
pub use sheet::{normalize_header, read_sheet_table};
