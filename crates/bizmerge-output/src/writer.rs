//! CSV writer for merged records.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use bizmerge_model::{MergedDataset, Record};
use csv::{Writer, WriterBuilder};
use tracing::info;

use crate::error::{OutputError, Result};

/// Union of record keys in first-seen order.
pub fn union_headers(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key) {
                headers.push(key.to_string());
            }
        }
    }
    headers
}

/// Write `merged` to a new file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created, written, or flushed.
pub fn write_merged(path: &Path, merged: &MergedDataset) -> Result<()> {
    let writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    write_rows(writer, &merged.records)?;
    info!(path = %path.display(), rows = merged.len(), "merged dataset written");
    Ok(())
}

/// Write `merged` as CSV to any sink.
pub fn write_merged_to<W: Write>(sink: W, merged: &MergedDataset) -> Result<()> {
    write_rows(WriterBuilder::new().from_writer(sink), &merged.records)
}

fn write_rows<W: Write>(mut writer: Writer<W>, records: &[Record]) -> Result<()> {
    let headers = union_headers(records);
    if !headers.is_empty() {
        writer.write_record(&headers)?;
    }
    for record in records {
        writer.write_record(headers.iter().map(|key| record.get(key).unwrap_or_default()))?;
    }
    writer.flush()?;
    Ok(())
}
