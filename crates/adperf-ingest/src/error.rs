//! Error types for performance-export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an uploaded export into records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Upload Errors ===
    /// File name and MIME type both fail the accepted-type check.
    #[error("Please upload a CSV file (got {file_name})")]
    UnsupportedFileType { file_name: String },

    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// The document has no data rows.
    #[error("CSV file is empty. Please upload a file with data.")]
    EmptyInput,

    /// One or more required headers are absent.
    #[error("CSV is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The underlying reader could not make sense of the document.
    #[error("Failed to parse CSV: {message}")]
    Parse { message: String },
}

impl IngestError {
    /// Columns reported by a validation failure, empty for other errors.
    pub fn missing_columns(&self) -> &[String] {
        match self {
            Self::MissingColumns { columns } => columns,
            _ => &[],
        }
    }
}

impl From<::csv::Error> for IngestError {
    fn from(err: ::csv::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = IngestError::MissingColumns {
            columns: vec!["Impressions".to_string(), "Campaign".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "CSV is missing required columns: Impressions, Campaign"
        );
        assert_eq!(err.missing_columns().len(), 2);
    }

    #[test]
    fn test_empty_input_has_no_columns() {
        assert!(IngestError::EmptyInput.missing_columns().is_empty());
    }
}
