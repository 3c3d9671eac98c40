//! Building dataset snapshots from parsed records.

use std::sync::Arc;

use adperf_ingest::campaigns_with_all;
use adperf_model::{Dataset, DatasetId, RawRecord};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate, process_records};
use crate::filter::campaign_filter;
use crate::stats::dashboard_stats;
use crate::validate::validate_aggregates;

/// Everything needed to build a new dataset.
#[derive(Debug, Clone)]
pub struct DatasetUpload {
    pub name: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub records: Vec<RawRecord>,
}

/// Builds a dataset with no campaign filter.
///
/// The id is derived from `uploaded_at`; callers holding a collection
/// resolve collisions.
pub fn build_dataset(upload: DatasetUpload) -> Dataset {
    let DatasetUpload {
        name,
        file_name,
        uploaded_at,
        records,
    } = upload;

    let campaigns = campaigns_with_all(&records);
    let processed_data = aggregate(&records);
    let stats = dashboard_stats(&processed_data);
    let id = DatasetId::from_timestamp(uploaded_at);

    for warning in validate_aggregates(&processed_data) {
        warn!(dataset = %id, "{warning}");
    }
    info!(
        dataset = %id,
        name = %name,
        rows = records.len(),
        publishers = processed_data.len(),
        campaigns = campaigns.len().saturating_sub(1),
        "built dataset"
    );

    Dataset {
        id,
        name,
        file_name,
        uploaded_at,
        raw_data: Arc::from(records),
        selected_campaign: None,
        processed_data,
        campaigns,
        stats,
    }
}

/// Returns a new dataset value with `campaign` applied.
///
/// The "all" sentinel clears the filter. Aggregates and stats are recomputed
/// from the raw records; the raw records themselves are shared.
pub fn with_campaign(dataset: &Dataset, campaign: Option<&str>) -> Dataset {
    let selected_campaign = campaign_filter(campaign).map(str::to_string);
    let processed_data = process_records(&dataset.raw_data, selected_campaign.as_deref());
    let stats = dashboard_stats(&processed_data);

    debug!(
        dataset = %dataset.id,
        campaign = selected_campaign.as_deref().unwrap_or("all"),
        publishers = processed_data.len(),
        "applied campaign filter"
    );

    Dataset {
        id: dataset.id.clone(),
        name: dataset.name.clone(),
        file_name: dataset.file_name.clone(),
        uploaded_at: dataset.uploaded_at,
        raw_data: Arc::clone(&dataset.raw_data),
        selected_campaign,
        processed_data,
        campaigns: dataset.campaigns.clone(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(publisher: &str, campaign: &str, impressions: &str, cost: &str) -> RawRecord {
        RawRecord {
            publisher_name: Some(publisher.to_string()),
            campaign: Some(campaign.to_string()),
            impressions: Some(impressions.to_string()),
            advertiser_cost: Some(cost.to_string()),
            ..RawRecord::default()
        }
    }

    fn upload() -> DatasetUpload {
        DatasetUpload {
            name: "January".to_string(),
            file_name: "january.csv".to_string(),
            uploaded_at: Utc.timestamp_millis_opt(1_718_000_000_000).unwrap(),
            records: vec![
                record("Hulu", "Spring", "10,000", "500.00"),
                record("Disney+", "Summer", "20,000", "1,000.00"),
            ],
        }
    }

    #[test]
    fn test_build_dataset() {
        let dataset = build_dataset(upload());
        assert_eq!(dataset.id.as_str(), "dataset_1718000000000");
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.campaigns.len(), 3);
        assert!(dataset.campaigns[0].is_all());
        assert_eq!(dataset.selected_campaign, None);
        assert_eq!(dataset.processed_data[0].publisher, "Disney+");
        assert_eq!(dataset.stats.total_spend, 1500.0);
    }

    #[test]
    fn test_with_campaign_is_a_new_value() {
        let dataset = build_dataset(upload());
        let spring = with_campaign(&dataset, Some("Spring"));

        assert_eq!(spring.selected_campaign.as_deref(), Some("Spring"));
        assert_eq!(spring.processed_data.len(), 1);
        assert_eq!(spring.processed_data[0].publisher, "Hulu");
        assert_eq!(spring.stats.total_spend, 500.0);
        assert!(Arc::ptr_eq(&spring.raw_data, &dataset.raw_data));
        assert_eq!(dataset.processed_data.len(), 2);

        let all = with_campaign(&spring, Some("all"));
        assert_eq!(all.selected_campaign, None);
        assert_eq!(all.processed_data, dataset.processed_data);
    }
}
