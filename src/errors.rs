// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrelimineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A single input row could not be turned into a course record.
    ///
    /// `row` is 1-based and counts data rows only; row 0 means the header.
    #[error("Ingestion error in row {row}: {message}")]
    IngestError { row: usize, message: String },

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Raised by the graph builder in strict mode for dangling prerequisites
    /// and duplicate shorthands.
    #[error("Strict mode violation: {0}")]
    StrictViolation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PrelimineError>;
