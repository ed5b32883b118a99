//! Streaming pass over a merged CSV file.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::error::{Result, ValidateError};
use crate::report::ValidationReport;

pub const DEFAULT_KEY_COLUMN: &str = "company_name";
pub const DEFAULT_ADDRESS_COLUMN: &str = "address";

/// Columns the validator inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Column whose distinct values are counted.
    pub key_column: String,
    /// Column that must be present and non-empty on every row.
    pub address_column: String,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            address_column: DEFAULT_ADDRESS_COLUMN.to_string(),
        }
    }
}

impl ValidateOptions {
    pub fn new(key_column: impl Into<String>, address_column: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            address_column: address_column.into(),
        }
    }
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Validate the CSV file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be read.
pub fn validate_file(path: &Path, options: &ValidateOptions) -> Result<ValidationReport> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| ValidateError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    validate_records(reader, options)
}

/// Validate CSV read from any byte stream.
pub fn validate_reader<R: Read>(input: R, options: &ValidateOptions) -> Result<ValidationReport> {
    validate_records(reader_builder().from_reader(input), options)
}

fn validate_records<R: Read>(
    mut reader: Reader<R>,
    options: &ValidateOptions,
) -> Result<ValidationReport> {
    let headers = reader.headers().map_err(ValidateError::Header)?;
    let key_index = column_index(headers, &options.key_column);
    let address_index = column_index(headers, &options.address_column);
    if key_index.is_none() {
        warn!(column = %options.key_column, "key column not found in header");
    }
    if address_index.is_none() {
        warn!(column = %options.address_column, "address column not found in header");
    }

    let mut report = ValidationReport::default();
    let mut keys: HashSet<Option<String>> = HashSet::new();
    let mut row = StringRecord::new();
    loop {
        let more = reader.read_record(&mut row).map_err(|source| {
            let line = source
                .position()
                .map_or(reader.position().line(), csv::Position::line);
            ValidateError::Record { line, source }
        })?;
        if !more {
            break;
        }
        report.total_rows += 1;
        keys.insert(field(&row, key_index).map(str::to_string));
        if field(&row, address_index).is_none_or(str::is_empty) {
            debug!(row = report.total_rows, "missing address");
            report.missing_address_rows.push(report.total_rows);
        }
    }
    report.unique_keys = keys.len();

    info!(
        total_rows = report.total_rows,
        unique_keys = report.unique_keys,
        missing_addresses = report.missing_address_rows.len(),
        "validation complete"
    );
    Ok(report)
}

fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

fn field(row: &StringRecord, index: Option<usize>) -> Option<&str> {
    index.and_then(|idx| row.get(idx))
}
