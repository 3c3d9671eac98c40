//! CLI library components for adperf.

pub mod format;
pub mod logging;
pub mod summary;
