use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::Campaign;
use crate::publisher::{AggregatedPublisherRecord, DashboardStats};
use crate::record::RawRecord;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Id derived from an upload time, e.g. `dataset_1718000000000`.
    pub fn from_timestamp(uploaded_at: DateTime<Utc>) -> Self {
        Self(format!("dataset_{}", uploaded_at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One uploaded performance export and everything derived from it.
///
/// A dataset is a snapshot: changing its campaign filter produces a new
/// value rather than editing this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: DatasetId,
    pub name: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    /// Parsed rows, shared between versions of the same dataset.
    pub raw_data: Arc<[RawRecord]>,
    /// `None` means all campaigns.
    pub selected_campaign: Option<String>,
    pub processed_data: Vec<AggregatedPublisherRecord>,
    /// Sentinel first, then real campaigns in ascending order.
    pub campaigns: Vec<Campaign>,
    pub stats: DashboardStats,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.raw_data.len()
    }

    pub fn publisher(&self, name: &str) -> Option<&AggregatedPublisherRecord> {
        self.processed_data
            .iter()
            .find(|record| record.publisher == name)
    }

    /// Display label for the current campaign filter.
    pub fn campaign_label(&self) -> &str {
        match &self.selected_campaign {
            Some(selected) => self
                .campaigns
                .iter()
                .find(|campaign| &campaign.id == selected)
                .map_or(selected.as_str(), |campaign| campaign.name.as_str()),
            None => crate::campaign::ALL_CAMPAIGNS_NAME,
        }
    }
}
