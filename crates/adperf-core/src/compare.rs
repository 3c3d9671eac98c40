//! Publisher reconciliation across datasets.
//!
//! Every publisher seen in any compared dataset gets one row with a slot per
//! dataset, so periods can be read side by side.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use adperf_model::{AggregatedPublisherRecord, ComparisonMetric, ComparisonRow, Dataset, DatasetMetrics};
use tracing::debug;

/// Rows shown in the comparison table.
pub const COMPARISON_TABLE_LIMIT: usize = 25;

/// Rows shown in the comparison chart.
pub const COMPARISON_CHART_LIMIT: usize = 10;

/// Smallest number of datasets that makes a comparison.
pub const MIN_COMPARISON_DATASETS: usize = 2;

/// Changes smaller than this (in percent) are reported as flat.
pub const FLAT_CHANGE_THRESHOLD: f64 = 0.1;

/// Builds one row per publisher across `datasets`.
///
/// Rows are ordered by publisher name. Each row holds one slot per dataset in
/// input order; a publisher missing from a dataset gets a zero-filled slot.
/// Fewer than two datasets yields no rows.
pub fn compare_datasets(datasets: &[&Dataset]) -> Vec<ComparisonRow> {
    if datasets.len() < MIN_COMPARISON_DATASETS {
        debug!(datasets = datasets.len(), "not enough datasets to compare");
        return Vec::new();
    }

    let publishers: BTreeSet<&str> = datasets
        .iter()
        .flat_map(|dataset| dataset.processed_data.iter())
        .map(|record| record.publisher.as_str())
        .collect();

    let lookups: Vec<HashMap<&str, &AggregatedPublisherRecord>> = datasets
        .iter()
        .map(|dataset| {
            let mut lookup = HashMap::new();
            for record in &dataset.processed_data {
                lookup.entry(record.publisher.as_str()).or_insert(record);
            }
            lookup
        })
        .collect();

    let rows: Vec<ComparisonRow> = publishers
        .into_iter()
        .map(|publisher| ComparisonRow {
            publisher: publisher.to_string(),
            datasets: datasets
                .iter()
                .zip(&lookups)
                .map(|(dataset, lookup)| match lookup.get(publisher) {
                    Some(record) => {
                        DatasetMetrics::from_record(dataset.id.as_str(), &dataset.name, record)
                    }
                    None => DatasetMetrics::empty(dataset.id.as_str(), &dataset.name),
                })
                .collect(),
        })
        .collect();

    debug!(
        datasets = datasets.len(),
        publishers = rows.len(),
        "reconciled datasets"
    );
    rows
}

/// Orders rows by spend summed over all slots (descending) and keeps `limit`.
pub fn rank_comparison_rows(rows: &[ComparisonRow], limit: usize) -> Vec<ComparisonRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.total_spend().total_cmp(&a.total_spend()));
    ranked.truncate(limit);
    ranked
}

/// Percent change of `metric` from the first to the second slot.
///
/// Defined only for two-slot rows whose first value is non-zero.
pub fn percent_change(row: &ComparisonRow, metric: ComparisonMetric) -> Option<f64> {
    let [first, second] = row.datasets.as_slice() else {
        return None;
    };
    let before = first.metric(metric);
    if before == 0.0 {
        return None;
    }
    Some((second.metric(metric) - before) / before * 100.0)
}

/// Direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeIndicator {
    Up(f64),
    Down(f64),
    Flat,
}

impl ChangeIndicator {
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(change) if change.abs() >= FLAT_CHANGE_THRESHOLD => {
                if change > 0.0 {
                    Self::Up(change)
                } else {
                    Self::Down(change)
                }
            }
            _ => Self::Flat,
        }
    }
}

impl fmt::Display for ChangeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up(change) => write!(f, "+{change:.1}%"),
            Self::Down(change) => write!(f, "{change:.1}%"),
            Self::Flat => f.write_str("-"),
        }
    }
}
