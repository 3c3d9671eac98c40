//! Integration tests for export parsing.

use adperf_ingest::{IngestError, extract_campaigns, parse_number, parse_records};
use proptest::prelude::*;

const EXPORT: &str = "\
Advertiser,Campaign,Media Type,Publisher Name,Publisher Name (with tail aggregation),Site,Publisher ID,Bids,Impressions,Advertiser Cost (Adv Currency),CPM,Ad Plays,Player Completed Views,Player Starts
Lawrence,CAMG | TTD | MVA/PI | Ohio | Lawrence : 4374,Video,Disney+,Disney+,291097,r9x8qzv,\"88,877\",\"48,421\",\"2,740.50\",56.5973651293435,1,2,3
Lawrence,CAMG | TTD | MVA/PI | Ohio | Lawrence : 4374,Video,Hulu,Hulu,com.hulu.plus,h1,\"30,000\",\"27,055\",\"1,364.32\",50.42,1,2,3

Lawrence,Spring Promo,Video,Hulu,,2285,h2,\"50,000\",\"42,910\",\"2,068.95\",48.21,1,2,3
";

#[test]
fn parses_full_export_and_skips_blank_lines() {
    let records = parse_records(EXPORT).expect("parse export");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].bids.as_deref(), Some("88,877"));
    assert_eq!(records[0].reported_cpm.as_deref(), Some("56.5973651293435"));
    assert_eq!(records[2].publisher_tail.as_deref(), Some(""));
    assert_eq!(records[2].publisher_key(), Some("Hulu"));
}

#[test]
fn campaigns_come_out_sorted() {
    let records = parse_records(EXPORT).expect("parse export");
    let names: Vec<String> = extract_campaigns(&records)
        .into_iter()
        .map(|campaign| campaign.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "CAMG | TTD | MVA/PI | Ohio | Lawrence : 4374".to_string(),
            "Spring Promo".to_string(),
        ]
    );
}

#[test]
fn missing_campaign_column_is_reported() {
    let text = "Publisher Name,Impressions,Advertiser Cost (Adv Currency)\nHulu,10,1.00\n";
    let err = parse_records(text).expect_err("campaign column missing");
    assert_eq!(err.missing_columns(), ["Campaign".to_string()]);
    insta::assert_snapshot!(err.to_string(), @"CSV is missing required columns: Campaign");
}

#[test]
fn every_missing_column_is_reported() {
    let err = parse_records("Site\n291097\n").expect_err("columns missing");
    insta::assert_snapshot!(
        err.to_string(),
        @"CSV is missing required columns: Publisher Name, Impressions, Advertiser Cost (Adv Currency), Campaign"
    );
}

#[test]
fn empty_input_is_distinct_from_validation() {
    let err = parse_records("Site\n").expect_err("no data rows");
    assert!(matches!(err, IngestError::EmptyInput));
    insta::assert_snapshot!(err.to_string(), @"CSV file is empty. Please upload a file with data.");
}

#[test]
fn numeric_examples() {
    assert_eq!(parse_number("48,421"), 48421.0);
    assert_eq!(parse_number("2,740.50"), 2740.50);
    assert_eq!(parse_number(""), 0.0);
    assert_eq!(parse_number("abc"), 0.0);
}

proptest! {
    #[test]
    fn parse_number_never_panics(value in ".*") {
        let parsed = parse_number(&value);
        prop_assert!(parsed.is_finite());
    }

    #[test]
    fn grouped_integers_parse_exactly(value in 0u64..1_000_000_000_000) {
        let digits = value.to_string();
        let mut grouped = String::new();
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        prop_assert_eq!(parse_number(&grouped), value as f64);
    }
}
