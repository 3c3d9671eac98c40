use std::sync::Arc;

use adperf_model::{Dataset, DatasetId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CURRENT_SCHEMA_VERSION;

/// Everything needed to rebuild a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Schema version for compatibility checking.
    pub schema_version: u32,

    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,

    /// Datasets in upload order.
    pub datasets: Vec<Arc<Dataset>>,

    pub active_dataset_id: Option<DatasetId>,

    /// Comparison selection, in selection order.
    #[serde(default)]
    pub selected_dataset_ids: Vec<DatasetId>,

    #[serde(default)]
    pub comparison_mode: bool,
}

impl DashboardSnapshot {
    /// An empty snapshot at the current schema version.
    pub fn empty() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            datasets: Vec::new(),
            active_dataset_id: None,
            selected_dataset_ids: Vec::new(),
            comparison_mode: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
