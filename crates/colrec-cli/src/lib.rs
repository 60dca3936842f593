//! CLI library components for the column reconciliation toolkit.

pub mod exit_codes;
pub mod logging;
pub mod pipeline;
pub mod summary;
