//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while streaming a source file. No partial dataset is
/// returned alongside any of these.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row could not be read.
    #[error("failed to read header of {path}: {source}")]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data row could not be parsed.
    #[error("failed to read record at line {line} of {path}: {source}")]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let source = csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = IngestError::Open {
            path: PathBuf::from("/data/google_dataset.csv"),
            source,
        };
        assert_eq!(
            err.to_string(),
            "failed to open /data/google_dataset.csv: no such file"
        );
    }
}
