//! Tests for adperf-model types.

use adperf_model::{
    AggregatedPublisherRecord, ComparisonMetric, ComparisonRow, DatasetId, DatasetMetrics,
    ModelError, RawRecord, SortDirection, SortField,
};

#[test]
fn sort_field_round_trips_wire_names() {
    for field in SortField::ALL {
        assert_eq!(field.as_str().parse::<SortField>(), Ok(field));
    }
    assert_eq!(
        "spend_percentage".parse::<SortField>(),
        Err(ModelError::UnknownSortField("spend_percentage".to_string()))
    );
}

#[test]
fn sort_direction_parses_and_reverses() {
    assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
    assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("up".parse::<SortDirection>().is_err());
    assert_eq!(SortDirection::Asc.reverse(), SortDirection::Desc);
    assert_eq!(SortDirection::default(), SortDirection::Desc);
}

#[test]
fn comparison_row_totals_spend_across_slots() {
    let record = AggregatedPublisherRecord {
        rank: 1,
        publisher: "Hulu".to_string(),
        impressions: 1000,
        spend: 100.0,
        cpm: 100.0,
        spend_percentage: 50.0,
    };
    let row = ComparisonRow {
        publisher: "Hulu".to_string(),
        datasets: vec![
            DatasetMetrics::from_record("a", "January", &record),
            DatasetMetrics::empty("b", "February"),
        ],
    };
    assert!((row.total_spend() - 100.0).abs() < 1e-9);
    assert!(row.datasets[1].is_empty());
    assert_eq!(row.datasets[0].metric(ComparisonMetric::Impressions), 1000.0);
}

#[test]
fn raw_record_serializes_with_column_names() {
    let record = RawRecord {
        publisher_name: Some("Disney+".to_string()),
        impressions: Some("48,421".to_string()),
        ..RawRecord::default()
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, r#"{"Publisher Name":"Disney+","Impressions":"48,421"}"#);
    let round: RawRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn dataset_id_is_transparent() {
    let id = DatasetId::new("dataset_42");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"dataset_42\"");
    assert_eq!(id.to_string(), "dataset_42");
}
