//! Snapshot saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::types::DashboardSnapshot;

/// Save a snapshot as JSON.
///
/// Writes to a sibling temp file and renames it over `path`, creating the
/// parent directory when needed.
pub fn save_snapshot(snapshot: &DashboardSnapshot, path: &Path) -> Result<()> {
    let bytes = serialize_snapshot(snapshot)?;
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        datasets = snapshot.datasets.len(),
        bytes = bytes.len(),
        "Saved dashboard snapshot to {}",
        path.display()
    );
    Ok(())
}

/// Serialize a snapshot to pretty-printed JSON bytes.
pub fn serialize_snapshot(snapshot: &DashboardSnapshot) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(snapshot).map_err(|source| PersistenceError::Serialization { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_snapshot_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        save_snapshot(&DashboardSnapshot::empty(), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"schemaVersion\": 1"));
    }
}
