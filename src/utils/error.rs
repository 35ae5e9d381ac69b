//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while locating and reading trace files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("No files matching: {0}")]
    NoMatches(String),

    #[error("Failed to read trace file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Trace file is not valid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid trace document: {0}")]
    InvalidDocument(#[from] ParseError),
}

/// Errors that can occur during trace parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Document has no top-level 'trace' object")]
    MissingTrace,

    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
