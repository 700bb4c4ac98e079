//! Error types for the contact normalizer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Line-scoped failures ([`ParseError`]) are always recovered by the pipeline
//! driver; [`NormalizeError`] aborts a run.

use crate::pipeline::FieldKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a single input line unparsable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token count does not match the expected field count, even after
    /// splitting a fused name
    #[error("Malformed entry: expected {expected} fields, found {found}")]
    MalformedEntry { expected: usize, found: usize },

    /// No trailing token could be classified as this field
    #[error("Missing field: {0}")]
    MissingField(FieldKind),
}

impl ParseError {
    /// Short, stable label for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedEntry { .. } => "malformed_entry",
            Self::MissingField(_) => "missing_field",
        }
    }
}

/// Errors that abort a whole normalization run.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Input file could not be opened or read
    #[error("Cannot read input file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written
    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result set could not be serialized
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with NormalizeError
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
