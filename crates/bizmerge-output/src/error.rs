//! Error types for writing the merged dataset.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row could not be serialized or written.
    #[error("failed to write merged row: {0}")]
    Write(#[from] csv::Error),

    /// Buffered output could not be flushed to the sink.
    #[error("failed to flush merged output: {0}")]
    Flush(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
