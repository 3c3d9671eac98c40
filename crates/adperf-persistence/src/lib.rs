//! Dashboard state and persistence for ad performance datasets.
//!
//! Holds uploaded datasets together with the active and comparison
//! selections, and saves that state between sessions.
//!
//! # Features
//!
//! - **Explicit state**: [`Dashboard`] replaces datasets as whole values
//! - **Pluggable storage**: [`SnapshotStore`] with file and in-memory backends
//! - **Atomic writes** to prevent snapshot corruption
//! - **Best-effort saves**: storage failures are logged, never fatal
//!
//! # Example
//!
//! ```ignore
//! use adperf_persistence::{Dashboard, JsonFileStore, UploadRequest};
//!
//! let store = JsonFileStore::new("adperf-state.json");
//! let mut dashboard = Dashboard::restore(&store);
//! let id = dashboard.upload(UploadRequest::new("january.csv", text))?;
//! dashboard.select_campaign(&id, Some("Spring Promo"))?;
//! dashboard.persist(&store);
//! ```

mod dashboard;
mod error;
mod io;
mod store;
mod types;

pub use dashboard::{Dashboard, UploadRequest};
pub use error::{PersistenceError, Result, StateError, StateResult};
pub use io::{load_snapshot, parse_snapshot, save_snapshot, serialize_snapshot};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore};
pub use types::{CURRENT_SCHEMA_VERSION, DEFAULT_STATE_FILE, DashboardSnapshot};
