//! Output artifacts: SQL insertion scripts and re-projected spreadsheets.

pub mod excel;
pub mod sql;

pub use excel::{project_records, write_spreadsheet};
pub use sql::{generate_insert_script, write_sql_script};
