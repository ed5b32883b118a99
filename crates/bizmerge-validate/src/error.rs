//! Error types for validation runs.

use std::path::PathBuf;

use thiserror::Error;

/// Read failures. A failed run produces no counts.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read header: {0}")]
    Header(#[source] csv::Error),

    #[error("failed to read row at line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
