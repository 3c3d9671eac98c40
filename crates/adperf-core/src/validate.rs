use adperf_model::AggregatedPublisherRecord;

/// Upper bound of a plausible CPM.
pub const MAX_PLAUSIBLE_CPM: f64 = 1000.0;

/// Sanity checks over aggregated publishers.
///
/// Returns one human-readable warning per finding. These never block
/// processing; callers log them.
pub fn validate_aggregates(records: &[AggregatedPublisherRecord]) -> Vec<String> {
    let mut warnings = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        let row = idx + 1;
        if record.impressions < 0 {
            warnings.push(format!("Row {row}: Negative impressions ({})", record.impressions));
        }
        if record.spend < 0.0 {
            warnings.push(format!("Row {row}: Negative spend (${:.2})", record.spend));
        }
        if record.publisher.trim().is_empty() {
            warnings.push(format!("Row {row}: Missing publisher name"));
        }
        if !(0.0..=MAX_PLAUSIBLE_CPM).contains(&record.cpm) {
            warnings.push(format!("Row {row}: Unusual CPM value (${:.2})", record.cpm));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(publisher: &str, impressions: i64, spend: f64, cpm: f64) -> AggregatedPublisherRecord {
        AggregatedPublisherRecord {
            rank: 1,
            publisher: publisher.to_string(),
            impressions,
            spend,
            cpm,
            spend_percentage: 100.0,
        }
    }

    #[test]
    fn test_clean_records_have_no_warnings() {
        assert!(validate_aggregates(&[record("Hulu", 1000, 50.0, 50.0)]).is_empty());
    }

    #[test]
    fn test_findings_are_reported_per_row() {
        let warnings = validate_aggregates(&[
            record("Hulu", 1000, 50.0, 50.0),
            record(" ", -10, -2.5, 1500.0),
        ]);
        assert_eq!(
            warnings,
            vec![
                "Row 2: Negative impressions (-10)",
                "Row 2: Negative spend ($-2.50)",
                "Row 2: Missing publisher name",
                "Row 2: Unusual CPM value ($1500.00)",
            ]
        );
    }
}
