//! Checks over the merged dataset file.
//!
//! Counts rows, counts distinct values of a key column, and flags rows
//! whose address column is missing or empty.

mod error;
mod report;
mod validator;

pub use error::{Result, ValidateError};
pub use report::ValidationReport;
pub use validator::{ValidateOptions, validate_file, validate_reader};
