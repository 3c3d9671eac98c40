//! Error types for dashboard state and snapshot storage.
//!
//! Storage errors carry user-facing messages and remediation hints; state
//! errors name the dataset or ingestion failure that caused them.

use std::path::PathBuf;

use adperf_ingest::IngestError;
use adperf_model::DatasetId;
use thiserror::Error;

/// Snapshot storage error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot written by a newer schema.
    #[error("Snapshot version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    /// Serialization error.
    #[error("Failed to serialize dashboard snapshot")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization error.
    #[error("Failed to deserialize dashboard snapshot")]
    Deserialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::UnsupportedVersion {
                found,
                max_supported,
            } => format!(
                "This snapshot was written by a newer version (snapshot version {found}, \
                supported up to {max_supported})."
            ),
            Self::Serialization { .. } => {
                "An error occurred while saving the dashboard state.".to_string()
            }
            Self::Deserialization { .. } => {
                "The saved dashboard state could not be read. The file may be corrupted."
                    .to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                target_path.display()
            ),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the state file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::UnsupportedVersion { .. } => Some("Update adperf to the latest version.".into()),
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => {
                Some("Delete the state file or run `adperf clear` to start over.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different --state path.".into())
            }
        }
    }
}

/// Dashboard state operation error.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Dataset not found: {id}")]
    UnknownDataset { id: DatasetId },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Result type alias for dashboard state operations.
pub type StateResult<T> = std::result::Result<T, StateError>;
