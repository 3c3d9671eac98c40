//! Snapshot storage backends.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{PersistenceError, Result};
use crate::io::{load_snapshot, parse_snapshot, save_snapshot, serialize_snapshot};
use crate::types::DashboardSnapshot;

/// Where dashboard snapshots are kept between sessions.
pub trait SnapshotStore {
    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &DashboardSnapshot) -> Result<()>;

    /// Loads the stored snapshot, `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<DashboardSnapshot>>;
}

/// JSON file on disk, written atomically.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, snapshot: &DashboardSnapshot) -> Result<()> {
        save_snapshot(snapshot, &self.path)
    }

    fn load(&self) -> Result<Option<DashboardSnapshot>> {
        match load_snapshot(&self.path) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(PersistenceError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved dashboard state");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// In-process store holding the serialized snapshot text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw snapshot bytes.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }

    /// The stored bytes, if any.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&self, snapshot: &DashboardSnapshot) -> Result<()> {
        let bytes = serialize_snapshot(snapshot)?;
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(bytes);
        Ok(())
    }

    fn load(&self) -> Result<Option<DashboardSnapshot>> {
        let guard = self.contents.lock().unwrap_or_else(PoisonError::into_inner);
        guard.as_deref().map(parse_snapshot).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        let snapshot = DashboardSnapshot::empty();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let snapshot = DashboardSnapshot::empty();
        store.save(&snapshot).unwrap();
        assert!(store.contents().is_some());
        assert_eq!(store.load().unwrap(), Some(snapshot));

        let corrupt = MemoryStore::with_contents("not json");
        assert!(matches!(
            corrupt.load(),
            Err(PersistenceError::Deserialization { .. })
        ));
    }
}
