//! Publisher aggregation.
//!
//! Rows are grouped by publisher identity, measures are summed per group and
//! the derived metrics (CPM, spend share) are computed once grouping is
//! complete. Output is ordered by spend and ranked.

use std::collections::HashMap;

use adperf_ingest::{parse_integer_cell, parse_number_cell};
use adperf_model::{AggregatedPublisherRecord, RawRecord};
use tracing::debug;

use crate::filter::filter_by_campaign;
use crate::metrics::{cpm, round_to, share_percent};

/// Number of publishers kept by [`aggregate`].
pub const DEFAULT_PUBLISHER_LIMIT: usize = 25;

/// Number of publishers shown in charts.
pub const DEFAULT_CHART_COUNT: usize = 10;

/// Options for [`aggregate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Maximum publishers returned (`None` keeps every group).
    pub limit: Option<usize>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_PUBLISHER_LIMIT),
        }
    }
}

impl AggregateOptions {
    /// Options that keep every publisher group.
    pub fn untruncated() -> Self {
        Self { limit: None }
    }

    /// Sets the publisher limit.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PublisherTotals {
    impressions: i64,
    spend: f64,
}

/// Aggregates records into the top [`DEFAULT_PUBLISHER_LIMIT`] publishers by spend.
pub fn aggregate(records: &[RawRecord]) -> Vec<AggregatedPublisherRecord> {
    aggregate_with(records, &AggregateOptions::default())
}

/// Aggregates records by publisher.
///
/// The grouping key is the tail-aggregated publisher when it has content,
/// otherwise the publisher name. Rows without a key are skipped. Groups are
/// ordered by spend descending with ties kept in first-seen order, ranked
/// from 1 and then truncated to `options.limit`.
pub fn aggregate_with(
    records: &[RawRecord],
    options: &AggregateOptions,
) -> Vec<AggregatedPublisherRecord> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, PublisherTotals)> = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(key) = record.publisher_key() else {
            skipped += 1;
            continue;
        };
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, PublisherTotals::default()));
            groups.len() - 1
        });
        let totals = &mut groups[slot].1;
        totals.impressions = totals
            .impressions
            .saturating_add(parse_integer_cell(record.impressions.as_deref()));
        totals.spend += parse_number_cell(record.advertiser_cost.as_deref());
    }

    let total_spend: f64 = groups.iter().map(|(_, totals)| totals.spend).sum();

    let mut aggregated: Vec<AggregatedPublisherRecord> = groups
        .into_iter()
        .map(|(publisher, totals)| AggregatedPublisherRecord {
            rank: 0,
            publisher: publisher.to_string(),
            impressions: totals.impressions,
            spend: totals.spend,
            cpm: round_to(cpm(totals.spend, totals.impressions), 2),
            spend_percentage: round_to(share_percent(totals.spend, total_spend), 1),
        })
        .collect();

    // Stable: equal spend keeps discovery order.
    aggregated.sort_by(|a, b| b.spend.total_cmp(&a.spend));
    for (idx, record) in aggregated.iter_mut().enumerate() {
        record.rank = idx + 1;
    }

    let publisher_count = aggregated.len();
    if let Some(limit) = options.limit {
        aggregated.truncate(limit);
    }

    debug!(
        rows = records.len(),
        skipped,
        publishers = publisher_count,
        kept = aggregated.len(),
        total_spend,
        "aggregated publishers"
    );
    aggregated
}

/// Filters records to a campaign and aggregates the result.
pub fn process_records(
    records: &[RawRecord],
    campaign: Option<&str>,
) -> Vec<AggregatedPublisherRecord> {
    let filtered = filter_by_campaign(records, campaign);
    if filtered.is_empty() {
        return Vec::new();
    }
    aggregate(&filtered)
}

/// The first `count` publishers of an already ordered list.
pub fn top_publishers(
    records: &[AggregatedPublisherRecord],
    count: usize,
) -> &[AggregatedPublisherRecord] {
    &records[..count.min(records.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(publisher: &str, impressions: &str, cost: &str) -> RawRecord {
        RawRecord {
            publisher_name: Some(publisher.to_string()),
            impressions: Some(impressions.to_string()),
            advertiser_cost: Some(cost.to_string()),
            campaign: Some("A".to_string()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_aggregate_sums_and_derives() {
        let records = vec![
            row("Hulu", "10,000", "500.00"),
            row("Hulu", "15,000", "750.00"),
            row("Disney+", "20,000", "1,000.00"),
        ];
        let result = aggregate(&records);

        assert_eq!(result.len(), 2);
        let hulu = &result[0];
        assert_eq!(hulu.rank, 1);
        assert_eq!(hulu.publisher, "Hulu");
        assert_eq!(hulu.impressions, 25_000);
        assert!((hulu.spend - 1250.0).abs() < 1e-9);
        assert_eq!(hulu.cpm, 50.0);
        assert_eq!(hulu.spend_percentage, 55.6);

        let disney = &result[1];
        assert_eq!(disney.rank, 2);
        assert_eq!(disney.impressions, 20_000);
        assert_eq!(disney.cpm, 50.0);
        assert_eq!(disney.spend_percentage, 44.4);
    }

    #[test]
    fn test_tail_alias_groups_sites() {
        let mut a = row("Roku Site A", "100", "1.00");
        a.publisher_tail = Some("Long Tail".to_string());
        let mut b = row("Roku Site B", "300", "3.00");
        b.publisher_tail = Some("Long Tail".to_string());
        let result = aggregate(&[a, b]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].publisher, "Long Tail");
        assert_eq!(result[0].impressions, 400);
    }

    #[test]
    fn test_rows_without_publisher_are_skipped() {
        let records = vec![row("", "100", "5.00"), row("Hulu", "100", "5.00")];
        let result = aggregate(&records);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].spend_percentage, 100.0);
    }

    #[test]
    fn test_zero_impressions_has_zero_cpm() {
        let result = aggregate(&[row("Hulu", "", "5.00")]);
        assert_eq!(result[0].impressions, 0);
        assert_eq!(result[0].cpm, 0.0);
    }

    #[test]
    fn test_zero_spend_has_zero_share() {
        let result = aggregate(&[row("Hulu", "10", "0"), row("Pluto", "10", "abc")]);
        assert!(result.iter().all(|r| r.spend_percentage == 0.0));
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let records = vec![
            row("Pluto", "1", "10"),
            row("Hulu", "1", "10"),
            row("Max", "1", "20"),
        ];
        let names: Vec<String> = aggregate(&records)
            .into_iter()
            .map(|r| r.publisher)
            .collect();
        assert_eq!(names, vec!["Max", "Pluto", "Hulu"]);
    }

    #[test]
    fn test_output_is_capped_at_limit() {
        let records: Vec<RawRecord> = (0..30)
            .map(|i| row(&format!("Publisher {i:02}"), "1000", &format!("{}", i + 1)))
            .collect();
        let capped = aggregate(&records);
        assert_eq!(capped.len(), DEFAULT_PUBLISHER_LIMIT);
        assert_eq!(capped[0].publisher, "Publisher 29");
        assert_eq!(capped[24].rank, 25);

        let all = aggregate_with(&records, &AggregateOptions::untruncated());
        assert_eq!(all.len(), 30);
        assert_eq!(all[29].publisher, "Publisher 00");
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(aggregate(&[]).is_empty());
        assert!(process_records(&[row("Hulu", "1", "1")], Some("B")).is_empty());
    }

    #[test]
    fn test_process_records_uses_filtered_total() {
        let mut other = row("Pluto", "1000", "300");
        other.campaign = Some("B".to_string());
        let records = vec![row("Hulu", "1000", "100"), other];
        let filtered = process_records(&records, Some("A"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].spend_percentage, 100.0);
        assert_eq!(process_records(&records, Some("all")).len(), 2);
    }

    #[test]
    fn test_top_publishers() {
        let records = vec![row("Hulu", "1", "3"), row("Pluto", "1", "2")];
        let aggregated = aggregate(&records);
        assert_eq!(top_publishers(&aggregated, 1).len(), 1);
        assert_eq!(top_publishers(&aggregated, 10).len(), 2);
    }

    #[test]
    fn test_whitespace_tail_alias_drops_row() {
        let mut blank_tail = row("Hulu", "1,000", "10");
        blank_tail.publisher_tail = Some("   ".to_string());
        assert!(aggregate(&[blank_tail]).is_empty());
    }
}
