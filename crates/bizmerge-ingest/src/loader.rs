//! CSV streaming into transformed datasets.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use bizmerge_model::{Dataset, LoadStats, RawRecord, Source};
use bizmerge_transform::RowTransformer;
use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, info, info_span};

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Load and transform every row of `source.path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any record is malformed.
pub fn load_dataset(source: &Source) -> Result<Dataset> {
    let reader = reader_builder()
        .from_path(&source.path)
        .map_err(|error| IngestError::Open {
            path: source.path.clone(),
            source: error,
        })?;
    read_records(reader, source)
}

/// Like [`load_dataset`], reading from an arbitrary byte stream.
///
/// `source.path` is only used to label errors and log events.
pub fn read_dataset<R: Read>(input: R, source: &Source) -> Result<Dataset> {
    read_records(reader_builder().from_reader(input), source)
}

fn read_records<R: Read>(mut reader: Reader<R>, source: &Source) -> Result<Dataset> {
    let path = source.path.as_path();
    let span = info_span!("load", prefix = %source.prefix, path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let headers = read_headers(&mut reader, path)?;
    debug!(columns = headers.len(), "header read");
    let transformer = RowTransformer::new(source, headers.iter().map(String::as_str));

    let mut stats = LoadStats::default();
    let mut records = Vec::new();
    let mut row = StringRecord::new();
    loop {
        let more = reader.read_record(&mut row).map_err(|error| {
            let line = error
                .position()
                .map_or(reader.position().line(), csv::Position::line);
            IngestError::Record {
                path: path.to_path_buf(),
                line,
                source: error,
            }
        })?;
        if !more {
            break;
        }
        stats.rows_read += 1;
        let values: Vec<&str> = row.iter().collect();
        let raw = RawRecord::from_headers(&headers, &values);
        match transformer.transform(&raw) {
            Some(record) => records.push(record),
            None => stats.rows_discarded += 1,
        }
    }
    stats.rows_kept = records.len();

    info!(
        rows_read = stats.rows_read,
        rows_kept = stats.rows_kept,
        rows_discarded = stats.rows_discarded,
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(Dataset::new(source.prefix.as_str(), records, stats))
}

fn read_headers<R: Read>(reader: &mut Reader<R>, path: &Path) -> Result<Vec<String>> {
    let headers = reader.headers().map_err(|error| IngestError::Header {
        path: path.to_path_buf(),
        source: error,
    })?;
    Ok(headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == 0 {
                header.trim_start_matches(UTF8_BOM).to_string()
            } else {
                header.to_string()
            }
        })
        .collect())
}
