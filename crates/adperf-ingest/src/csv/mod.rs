//! CSV reading utilities.

mod header;
mod reader;

pub use header::{missing_required_columns, normalize_header};
pub use reader::{parse_reader, parse_records, read_records_file};
