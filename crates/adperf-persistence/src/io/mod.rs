//! File I/O for dashboard snapshots.
//!
//! - Saving with atomic writes
//! - Loading with schema version validation

mod load;
mod save;

pub use load::{load_snapshot, parse_snapshot};
pub use save::{save_snapshot, serialize_snapshot};
