use std::fmt;

use serde::{Deserialize, Serialize};

use crate::publisher::AggregatedPublisherRecord;

/// One dataset's metrics for a publisher in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetrics {
    pub dataset_id: String,
    pub dataset_name: String,
    pub impressions: i64,
    pub spend: f64,
    pub cpm: f64,
    pub spend_percentage: f64,
}

impl DatasetMetrics {
    /// Zero-filled slot for a publisher missing from a dataset.
    pub fn empty(dataset_id: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            dataset_name: dataset_name.into(),
            impressions: 0,
            spend: 0.0,
            cpm: 0.0,
            spend_percentage: 0.0,
        }
    }

    pub fn from_record(
        dataset_id: impl Into<String>,
        dataset_name: impl Into<String>,
        record: &AggregatedPublisherRecord,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            dataset_name: dataset_name.into(),
            impressions: record.impressions,
            spend: record.spend,
            cpm: record.cpm,
            spend_percentage: record.spend_percentage,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.impressions == 0 && self.spend == 0.0 && self.cpm == 0.0
    }

    pub fn metric(&self, metric: ComparisonMetric) -> f64 {
        match metric {
            ComparisonMetric::Impressions => self.impressions as f64,
            ComparisonMetric::Spend => self.spend,
            ComparisonMetric::Cpm => self.cpm,
        }
    }
}

/// A publisher's metrics across every compared dataset.
///
/// `datasets` always has one slot per compared dataset, in comparison order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub publisher: String,
    pub datasets: Vec<DatasetMetrics>,
}

impl ComparisonRow {
    /// Spend summed over all dataset slots.
    pub fn total_spend(&self) -> f64 {
        self.datasets.iter().map(|slot| slot.spend).sum()
    }
}

/// Metrics for which a period-over-period change is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMetric {
    Impressions,
    Spend,
    Cpm,
}

impl ComparisonMetric {
    pub const ALL: [ComparisonMetric; 3] = [Self::Impressions, Self::Spend, Self::Cpm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Impressions => "Impressions",
            Self::Spend => "Spend",
            Self::Cpm => "CPM",
        }
    }
}

impl fmt::Display for ComparisonMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
