//! Data model for the ad performance pipeline.
//!
//! Types flow through the pipeline in this order:
//!
//! ```text
//! CSV text -> RawRecord -> AggregatedPublisherRecord -> DashboardStats
//!                                                    \-> ComparisonRow
//! ```
//!
//! All output types serialize with camelCase field names so rendering
//! collaborators see the same JSON shape regardless of the front end.

pub mod campaign;
pub mod comparison;
pub mod dataset;
pub mod error;
pub mod publisher;
pub mod record;
pub mod sort;

pub use campaign::{ALL_CAMPAIGNS_ID, ALL_CAMPAIGNS_NAME, Campaign};
pub use comparison::{ComparisonMetric, ComparisonRow, DatasetMetrics};
pub use dataset::{Dataset, DatasetId};
pub use error::{ModelError, Result};
pub use publisher::{AggregatedPublisherRecord, DashboardStats};
pub use record::{RawRecord, columns};
pub use sort::{SortDirection, SortField};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_with_camel_case() {
        let stats = DashboardStats {
            total_impressions: 45_000,
            total_spend: 2250.0,
            average_cpm: 50.0,
        };
        let json = serde_json::to_string(&stats).expect("serialize stats");
        assert!(json.contains("\"totalImpressions\":45000"));
        assert!(json.contains("\"averageCPM\":50.0"));
    }

    #[test]
    fn sentinel_campaign_is_all() {
        let all = Campaign::all();
        assert!(all.is_all());
        assert_eq!(all.id, ALL_CAMPAIGNS_ID);
        assert_eq!(all.name, ALL_CAMPAIGNS_NAME);
    }
}
