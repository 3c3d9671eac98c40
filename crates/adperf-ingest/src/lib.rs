//! Ad performance ingestion utilities.
//!
//! This crate turns an uploaded performance export (CSV text with a header
//! row) into typed [`RawRecord`](adperf_model::RawRecord)s.
//!
//! # Features
//!
//! - **CSV Parsing**: header-keyed rows with required-column validation
//! - **Numeric Cleanup**: lenient conversion of `"2,740.50"` style cells
//! - **Campaign Discovery**: distinct campaigns for the filter dropdown
//! - **Upload Checks**: accepted file types and default dataset names
//!
//! # Example
//!
//! ```ignore
//! use adperf_ingest::{campaigns_with_all, parse_records, validate_file_type};
//!
//! validate_file_type("jan.csv", Some("text/csv"))?;
//! let records = parse_records(&text)?;
//! let campaigns = campaigns_with_all(&records);
//! ```

mod campaigns;
mod csv;
mod error;
mod numeric;
mod upload;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use self::csv::{
    missing_required_columns, normalize_header, parse_reader, parse_records, read_records_file,
};

// === Numeric Cells ===
pub use numeric::{parse_integer, parse_integer_cell, parse_number, parse_number_cell};

// === Campaigns ===
pub use campaigns::{campaigns_with_all, extract_campaigns};

// === Upload Checks ===
pub use upload::{
    ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES, dataset_name_from_file, format_file_size,
    validate_file_type,
};
