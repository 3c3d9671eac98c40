//! Multi-dataset dashboard state.
//!
//! Datasets are immutable snapshots behind [`Arc`]. Every change replaces
//! the affected dataset as a whole, so a dataset handed out earlier keeps
//! describing the state it was taken from.

use std::sync::Arc;

use adperf_core::{DatasetUpload, build_dataset, compare_datasets, with_campaign};
use adperf_ingest::{dataset_name_from_file, parse_records, validate_file_type};
use adperf_model::{ComparisonRow, Dataset, DatasetId};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{StateError, StateResult};
use crate::store::SnapshotStore;
use crate::types::{CURRENT_SCHEMA_VERSION, DashboardSnapshot};

/// An uploaded file as received from the front end.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub file_name: String,
    /// MIME type reported by the client, if any.
    pub mime: Option<String>,
    /// Display name; defaults to the file name without `.csv`.
    pub name: Option<String>,
    pub contents: String,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// Uploaded datasets plus the active and comparison selections.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    datasets: Vec<Arc<Dataset>>,
    active_dataset_id: Option<DatasetId>,
    selected_dataset_ids: Vec<DatasetId>,
    comparison_mode: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    // === Uploads ===

    /// Validates, parses and adds an uploaded file; the new dataset becomes active.
    ///
    /// On error the dashboard is left unchanged.
    pub fn upload(&mut self, request: UploadRequest) -> StateResult<DatasetId> {
        self.upload_at(request, Utc::now())
    }

    /// [`upload`](Self::upload) with an explicit upload time.
    pub fn upload_at(
        &mut self,
        request: UploadRequest,
        uploaded_at: DateTime<Utc>,
    ) -> StateResult<DatasetId> {
        let UploadRequest {
            file_name,
            mime,
            name,
            contents,
        } = request;

        validate_file_type(&file_name, mime.as_deref())?;
        let records = parse_records(&contents)?;

        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| dataset_name_from_file(&file_name));

        let mut dataset = build_dataset(DatasetUpload {
            name,
            file_name,
            uploaded_at,
            records,
        });
        dataset.id = self.unique_id(dataset.id);

        let id = dataset.id.clone();
        info!(dataset = %id, name = %dataset.name, rows = dataset.row_count(), "uploaded dataset");
        self.datasets.push(Arc::new(dataset));
        self.active_dataset_id = Some(id.clone());
        Ok(id)
    }

    fn unique_id(&self, base: DatasetId) -> DatasetId {
        if self.dataset(&base).is_none() {
            return base;
        }
        let mut suffix = 2;
        loop {
            let candidate = DatasetId::new(format!("{base}_{suffix}"));
            if self.dataset(&candidate).is_none() {
                return candidate;
            }
            suffix += 1;
        }
    }

    // === Dataset management ===

    pub fn set_active(&mut self, id: &DatasetId) -> StateResult<()> {
        self.require(id)?;
        self.active_dataset_id = Some(id.clone());
        Ok(())
    }

    /// Removes a dataset and drops it from the comparison selection.
    ///
    /// When the active dataset is removed, the first remaining one becomes active.
    pub fn delete(&mut self, id: &DatasetId) -> StateResult<Arc<Dataset>> {
        let position = self.position(id)?;
        let removed = self.datasets.remove(position);
        self.selected_dataset_ids.retain(|selected| selected != id);
        if self.active_dataset_id.as_ref() == Some(id) {
            self.active_dataset_id = self.datasets.first().map(|dataset| dataset.id.clone());
        }
        info!(dataset = %id, remaining = self.datasets.len(), "deleted dataset");
        Ok(removed)
    }

    /// Renames a dataset. Blank names are ignored.
    pub fn rename(&mut self, id: &DatasetId, name: &str) -> StateResult<()> {
        let position = self.position(id)?;
        let name = name.trim();
        if name.is_empty() {
            debug!(dataset = %id, "ignoring blank dataset name");
            return Ok(());
        }
        let mut renamed = Dataset::clone(&self.datasets[position]);
        renamed.name = name.to_string();
        self.datasets[position] = Arc::new(renamed);
        Ok(())
    }

    /// Applies a campaign filter to one dataset; `None` or `"all"` clears it.
    pub fn select_campaign(&mut self, id: &DatasetId, campaign: Option<&str>) -> StateResult<()> {
        let position = self.position(id)?;
        let filtered = with_campaign(&self.datasets[position], campaign);
        self.datasets[position] = Arc::new(filtered);
        Ok(())
    }

    // === Comparison ===

    /// Replaces the comparison selection. Unknown and repeated ids are dropped.
    pub fn select_for_comparison(&mut self, ids: &[DatasetId]) {
        let mut selected: Vec<DatasetId> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.dataset(id).is_none() {
                warn!(dataset = %id, "ignoring unknown dataset in comparison selection");
                continue;
            }
            if !selected.contains(id) {
                selected.push(id.clone());
            }
        }
        self.selected_dataset_ids = selected;
    }

    /// Adds or removes one dataset from the comparison selection.
    ///
    /// Returns whether the dataset is selected afterwards.
    pub fn toggle_comparison(&mut self, id: &DatasetId) -> StateResult<bool> {
        self.require(id)?;
        if let Some(position) = self.selected_dataset_ids.iter().position(|s| s == id) {
            self.selected_dataset_ids.remove(position);
            Ok(false)
        } else {
            self.selected_dataset_ids.push(id.clone());
            Ok(true)
        }
    }

    pub fn set_comparison_mode(&mut self, enabled: bool) {
        self.comparison_mode = enabled;
    }

    pub fn clear(&mut self) {
        info!(datasets = self.datasets.len(), "cleared dashboard");
        *self = Self::default();
    }

    // === Queries ===

    pub fn datasets(&self) -> &[Arc<Dataset>] {
        &self.datasets
    }

    pub fn dataset(&self, id: &DatasetId) -> Option<&Arc<Dataset>> {
        self.datasets.iter().find(|dataset| &dataset.id == id)
    }

    pub fn active_dataset_id(&self) -> Option<&DatasetId> {
        self.active_dataset_id.as_ref()
    }

    pub fn active_dataset(&self) -> Option<&Arc<Dataset>> {
        self.active_dataset_id.as_ref().and_then(|id| self.dataset(id))
    }

    pub fn selected_dataset_ids(&self) -> &[DatasetId] {
        &self.selected_dataset_ids
    }

    /// Selected datasets in selection order.
    pub fn selected_datasets(&self) -> Vec<&Arc<Dataset>> {
        self.selected_dataset_ids
            .iter()
            .filter_map(|id| self.dataset(id))
            .collect()
    }

    pub fn is_selected(&self, id: &DatasetId) -> bool {
        self.selected_dataset_ids.contains(id)
    }

    pub fn comparison_mode(&self) -> bool {
        self.comparison_mode
    }

    /// Publisher rows across the selected datasets (empty below two).
    pub fn comparison(&self) -> Vec<ComparisonRow> {
        let selected: Vec<&Dataset> = self
            .selected_datasets()
            .into_iter()
            .map(Arc::as_ref)
            .collect();
        compare_datasets(&selected)
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    fn position(&self, id: &DatasetId) -> StateResult<usize> {
        self.datasets
            .iter()
            .position(|dataset| &dataset.id == id)
            .ok_or_else(|| StateError::UnknownDataset { id: id.clone() })
    }

    fn require(&self, id: &DatasetId) -> StateResult<()> {
        self.position(id).map(|_| ())
    }

    // === Snapshots ===

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            datasets: self.datasets.clone(),
            active_dataset_id: self.active_dataset_id.clone(),
            selected_dataset_ids: self.selected_dataset_ids.clone(),
            comparison_mode: self.comparison_mode,
        }
    }

    /// Rebuilds a dashboard, dropping references to datasets that no longer exist.
    pub fn from_snapshot(snapshot: DashboardSnapshot) -> Self {
        let mut dashboard = Self {
            datasets: snapshot.datasets,
            active_dataset_id: None,
            selected_dataset_ids: Vec::new(),
            comparison_mode: snapshot.comparison_mode,
        };
        dashboard.active_dataset_id = snapshot
            .active_dataset_id
            .filter(|id| dashboard.dataset(id).is_some())
            .or_else(|| dashboard.datasets.first().map(|dataset| dataset.id.clone()));
        dashboard.select_for_comparison(&snapshot.selected_dataset_ids);
        dashboard
    }

    /// Saves the current state, best effort.
    ///
    /// Failures are logged and otherwise ignored; the in-memory state stays
    /// authoritative.
    pub fn persist(&self, store: &dyn SnapshotStore) {
        if let Err(err) = store.save(&self.snapshot()) {
            warn!(error = %err, "{}", err.user_message());
        }
    }

    /// Loads saved state, or starts empty when there is none or it is unreadable.
    pub fn restore(store: &dyn SnapshotStore) -> Self {
        match store.load() {
            Ok(Some(snapshot)) => Self::from_snapshot(snapshot),
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(error = %err, "{}", err.user_message());
                Self::default()
            }
        }
    }
}
