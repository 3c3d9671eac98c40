//! Re-ordering of aggregated publishers for display.

use std::cmp::Ordering;

use adperf_model::{AggregatedPublisherRecord, SortDirection, SortField};

/// Returns a copy of `records` ordered by `field` in `direction`.
///
/// Publisher names compare case-insensitively; numeric fields use their
/// natural ordering. Ranks are left untouched.
pub fn sort_publishers(
    records: &[AggregatedPublisherRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<AggregatedPublisherRecord> {
    let mut sorted = records.to_vec();
    match field {
        SortField::Publisher => {
            sorted.sort_by_cached_key(|record| record.publisher.to_lowercase());
            if direction == SortDirection::Desc {
                sorted.reverse();
            }
        }
        _ => sorted.sort_by(|a, b| {
            let ordering = compare_numeric(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }),
    }
    sorted
}

/// Sorts using wire names, e.g. `("spendPercentage", "asc")`.
///
/// An unknown field leaves the order unchanged. Any direction other than
/// `"asc"` sorts descending.
pub fn sort_publishers_by_name(
    records: &[AggregatedPublisherRecord],
    field: &str,
    direction: &str,
) -> Vec<AggregatedPublisherRecord> {
    let Ok(field) = field.parse::<SortField>() else {
        tracing::debug!(field, "unknown sort field, keeping order");
        return records.to_vec();
    };
    let direction = if direction == "asc" {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    sort_publishers(records, field, direction)
}

fn compare_numeric(
    a: &AggregatedPublisherRecord,
    b: &AggregatedPublisherRecord,
    field: SortField,
) -> Ordering {
    match field {
        SortField::Rank => a.rank.cmp(&b.rank),
        SortField::Impressions => a.impressions.cmp(&b.impressions),
        SortField::Spend => a.spend.total_cmp(&b.spend),
        SortField::Cpm => a.cpm.total_cmp(&b.cpm),
        SortField::SpendPercentage => a.spend_percentage.total_cmp(&b.spend_percentage),
        SortField::Publisher => a.publisher.to_lowercase().cmp(&b.publisher.to_lowercase()),
    }
}
