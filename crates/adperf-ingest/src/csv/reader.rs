//! CSV document parsing into typed records.

use std::io::Read;
use std::path::Path;

use ::csv::ReaderBuilder;
use adperf_model::RawRecord;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::{missing_required_columns, normalize_header};

/// Parses CSV text with a header row into records.
///
/// Rows are keyed by trimmed header name. Fails with
/// [`IngestError::EmptyInput`] when there are no data rows,
/// [`IngestError::MissingColumns`] when required headers are absent and
/// [`IngestError::Parse`] when the document itself is malformed.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    parse_reader(text.as_bytes())
}

/// Parses CSV from any reader. See [`parse_records`].
pub fn parse_reader<R: Read>(input: R) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = RawRecord::default();
        for (header, value) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            record.set(header, value.to_string());
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let missing = missing_required_columns(&headers);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { columns: missing });
    }

    debug!(
        rows = records.len(),
        columns = headers.len(),
        "parsed performance export"
    );
    Ok(records)
}

/// Reads and parses a CSV file from disk.
pub fn read_records_file(path: &Path) -> Result<Vec<RawRecord>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_reader(bytes.as_slice())
}
