//! Snapshot loading operations.

use std::fs;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, DashboardSnapshot};

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let snapshot = parse_snapshot(&bytes)?;
    tracing::info!(
        datasets = snapshot.datasets.len(),
        "Loaded dashboard snapshot from {}",
        path.display()
    );
    Ok(snapshot)
}

/// Parse snapshot JSON and validate the schema version.
pub fn parse_snapshot(bytes: &[u8]) -> Result<DashboardSnapshot> {
    let snapshot: DashboardSnapshot = serde_json::from_slice(bytes)
        .map_err(|source| PersistenceError::Deserialization { source })?;

    if snapshot.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: snapshot.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
        });
    }
    Ok(snapshot)
}
