use std::io;
use std::result;

use thiserror::Error;

use crate::models::RecordKind;

/// Error types for reading, validating and writing bibliographic records
#[derive(Error, Debug)]
pub enum CitationError {
    /// Reading a source or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A CSV sheet could not be parsed into records
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON source document could not be parsed into records
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A record field violates its constraint
    #[error("Invalid {kind} record: field `{field}` {reason}")]
    InvalidRecord {
        kind: RecordKind,
        field: &'static str,
        reason: String,
    },

    /// Citation style name is not recognised
    #[error("Unknown citation style: {0}")]
    UnknownStyle(String),

    /// Source path is neither a sheet directory nor a JSON document
    #[error("Unsupported source format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = result::Result<T, CitationError>;
