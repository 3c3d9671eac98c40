use adperf_model::{AggregatedPublisherRecord, DashboardStats};

use crate::metrics::{cpm, round_to};

/// Summary figures for a set of aggregated publishers.
///
/// Spend and average CPM are rounded to 2 decimals; an empty set is all zeros.
pub fn dashboard_stats(records: &[AggregatedPublisherRecord]) -> DashboardStats {
    if records.is_empty() {
        return DashboardStats::default();
    }
    let total_impressions = records
        .iter()
        .fold(0i64, |total, r| total.saturating_add(r.impressions));
    let total_spend: f64 = records.iter().map(|r| r.spend).sum();

    DashboardStats {
        total_impressions,
        total_spend: round_to(total_spend, 2),
        average_cpm: round_to(cpm(total_spend, total_impressions), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(publisher: &str, impressions: i64, spend: f64) -> AggregatedPublisherRecord {
        AggregatedPublisherRecord {
            rank: 1,
            publisher: publisher.to_string(),
            impressions,
            spend,
            cpm: 0.0,
            spend_percentage: 0.0,
        }
    }

    #[test]
    fn test_stats_totals() {
        let stats = dashboard_stats(&[record("Hulu", 25_000, 1250.0), record("Disney+", 20_000, 1000.0)]);
        assert_eq!(stats.total_impressions, 45_000);
        assert_eq!(stats.total_spend, 2250.0);
        assert_eq!(stats.average_cpm, 50.0);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(dashboard_stats(&[]), DashboardStats::default());
    }

    #[test]
    fn test_stats_zero_impressions() {
        let stats = dashboard_stats(&[record("Hulu", 0, 12.3456)]);
        assert_eq!(stats.average_cpm, 0.0);
        assert_eq!(stats.total_spend, 12.35);
    }

    #[test]
    fn test_stats_saturate_impressions() {
        let stats = dashboard_stats(&[record("Hulu", i64::MAX, 10.0), record("Disney+", i64::MAX, 5.0)]);
        assert_eq!(stats.total_impressions, i64::MAX);
        assert_eq!(stats.total_spend, 15.0);
    }
}
