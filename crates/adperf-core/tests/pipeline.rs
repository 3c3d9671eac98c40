//! End-to-end tests from export text to dashboard figures.

use adperf_core::{dashboard_stats, process_records, sort_publishers_by_name};
use adperf_ingest::parse_records;

const EXPORT: &str = "\
Campaign,Publisher Name,Publisher Name (with tail aggregation),Impressions,Advertiser Cost (Adv Currency)
Spring,Hulu,,\"10,000\",500.00
Spring,Hulu,,\"15,000\",750.00
Summer,Disney+,Disney+,\"20,000\",\"1,000.00\"
";

#[test]
fn aggregates_export_into_ranked_publishers() {
    let records = parse_records(EXPORT).expect("parse export");
    let publishers = process_records(&records, None);

    insta::assert_json_snapshot!(publishers, @r###"
    [
      {
        "rank": 1,
        "publisher": "Hulu",
        "impressions": 25000,
        "spend": 1250.0,
        "cpm": 50.0,
        "spendPercentage": 55.6
      },
      {
        "rank": 2,
        "publisher": "Disney+",
        "impressions": 20000,
        "spend": 1000.0,
        "cpm": 50.0,
        "spendPercentage": 44.4
      }
    ]
    "###);

    let stats = dashboard_stats(&publishers);
    assert_eq!(stats.total_impressions, 45_000);
    assert_eq!(stats.total_spend, 2250.0);
    assert_eq!(stats.average_cpm, 50.0);
}

#[test]
fn campaign_filter_recomputes_shares() {
    let records = parse_records(EXPORT).expect("parse export");
    let summer = process_records(&records, Some("Summer"));
    assert_eq!(summer.len(), 1);
    assert_eq!(summer[0].publisher, "Disney+");
    assert_eq!(summer[0].rank, 1);
    assert_eq!(summer[0].spend_percentage, 100.0);

    assert!(process_records(&records, Some("summer")).is_empty());
}

#[test]
fn display_sort_by_wire_names() {
    let records = parse_records(EXPORT).expect("parse export");
    let publishers = process_records(&records, None);
    let by_name = sort_publishers_by_name(&publishers, "publisher", "asc");
    assert_eq!(by_name[0].publisher, "Disney+");
    assert_eq!(by_name[0].rank, 2);
}
