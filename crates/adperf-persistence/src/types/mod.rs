//! Persistence types for dashboard state.

mod snapshot;

pub use snapshot::DashboardSnapshot;

/// Current snapshot schema version.
///
/// The loader rejects snapshots with a version above this one.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Default snapshot file name used by the command line front end.
pub const DEFAULT_STATE_FILE: &str = "adperf-state.json";
