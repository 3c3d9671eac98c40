use serde::{Deserialize, Serialize};

/// Metrics for one publisher within a (possibly filtered) record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPublisherRecord {
    /// 1-based position after ordering by spend.
    pub rank: usize,
    pub publisher: String,
    pub impressions: i64,
    /// Unrounded spend total.
    pub spend: f64,
    /// Cost per thousand impressions, rounded to 2 decimals.
    pub cpm: f64,
    /// Share of the set's total spend, rounded to 1 decimal.
    pub spend_percentage: f64,
}

/// Summary totals shown above a publisher table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_impressions: i64,
    pub total_spend: f64,
    /// Weighted by impressions, not a mean of per-publisher CPMs.
    #[serde(rename = "averageCPM")]
    pub average_cpm: f64,
}
