//! Ad performance pipeline.
//!
//! Pure transformations from parsed records to the figures a dashboard shows:
//!
//! 1. [`filter_by_campaign`] narrows raw records to one campaign
//! 2. [`aggregate`] groups by publisher, derives CPM and spend share, ranks
//! 3. [`dashboard_stats`] summarizes an aggregated set
//! 4. [`sort_publishers`] re-orders for display
//! 5. [`compare_datasets`] reconciles publishers across datasets
//!
//! None of these fail: malformed numbers were already coerced to zero during
//! ingestion.

pub mod aggregate;
pub mod compare;
pub mod dataset;
pub mod filter;
pub mod metrics;
pub mod sort;
pub mod stats;
pub mod validate;

pub use aggregate::{
    AggregateOptions, DEFAULT_CHART_COUNT, DEFAULT_PUBLISHER_LIMIT, aggregate, aggregate_with,
    process_records, top_publishers,
};
pub use compare::{
    COMPARISON_CHART_LIMIT, COMPARISON_TABLE_LIMIT, ChangeIndicator, FLAT_CHANGE_THRESHOLD,
    MIN_COMPARISON_DATASETS, compare_datasets, percent_change, rank_comparison_rows,
};
pub use dataset::{DatasetUpload, build_dataset, with_campaign};
pub use filter::{campaign_filter, filter_by_campaign};
pub use metrics::{cpm, round_to, share_percent};
pub use sort::{sort_publishers, sort_publishers_by_name};
pub use stats::dashboard_stats;
pub use validate::{MAX_PLAUSIBLE_CPM, validate_aggregates};
