//! Error taxonomy: one enum per failure category, aggregated at the top.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading tabular or structured input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },
    #[error("unsupported spreadsheet extension: {path}")]
    UnsupportedExtension { path: PathBuf },
    #[error("spreadsheet {path} contains no rows")]
    EmptySheet { path: PathBuf },
    #[error("failed to parse records from {path}: {source}")]
    Records {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("record source {path} contains no records")]
    EmptyRecords { path: PathBuf },
}

/// Failures reported by an embedding provider, or contract violations
/// detected around one.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("embedding provider failed: {0}")]
    Provider(String),
    #[error("provider returned {actual} embeddings for {expected} inputs")]
    BatchShape { expected: usize, actual: usize },
}

/// Failures during column matching.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Embed(#[from] EmbedError),
    #[error("embedding has {actual} dimensions, provider declares {expected}")]
    Dimension { expected: usize, actual: usize },
}

/// Failures while serializing or writing output artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{name}' is not a valid SQL identifier")]
    InvalidIdentifier { name: String },
    #[error("matched column '{name}' is not present in the input sheet")]
    UnknownColumn { name: String },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write spreadsheet: {message}")]
    Excel { message: String },
}

/// Top-level error for a reconciliation run.
#[derive(Debug, Error)]
pub enum ColrecError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Embed(#[from] EmbedError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, ColrecError>;
