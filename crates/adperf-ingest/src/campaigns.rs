//! Campaign discovery for the filter dropdown.

use std::collections::BTreeSet;

use adperf_model::{Campaign, RawRecord};

/// Distinct non-empty campaign names, trimmed and sorted ascending.
pub fn extract_campaigns(records: &[RawRecord]) -> Vec<Campaign> {
    let names: BTreeSet<&str> = records
        .iter()
        .map(|record| record.campaign().trim())
        .filter(|name| !name.is_empty())
        .collect();
    names.into_iter().map(Campaign::named).collect()
}

/// [`extract_campaigns`] with the "All Campaigns" sentinel in front.
pub fn campaigns_with_all(records: &[RawRecord]) -> Vec<Campaign> {
    std::iter::once(Campaign::all())
        .chain(extract_campaigns(records))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_campaign(campaign: Option<&str>) -> RawRecord {
        RawRecord {
            campaign: campaign.map(str::to_string),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_extract_campaigns_dedupes_and_sorts() {
        let records = vec![
            with_campaign(Some("Spring | Ohio")),
            with_campaign(Some(" Autumn ")),
            with_campaign(Some("Spring | Ohio")),
            with_campaign(Some("")),
            with_campaign(None),
            with_campaign(Some("Autumn")),
        ];
        let campaigns = extract_campaigns(&records);
        assert_eq!(
            campaigns,
            vec![Campaign::named("Autumn"), Campaign::named("Spring | Ohio")]
        );
        assert_eq!(campaigns[0].id, campaigns[0].name);
    }

    #[test]
    fn test_campaigns_with_all_puts_sentinel_first() {
        let campaigns = campaigns_with_all(&[with_campaign(Some("B"))]);
        assert_eq!(campaigns.len(), 2);
        assert!(campaigns[0].is_all());
        assert_eq!(campaigns[1].name, "B");
        assert_eq!(campaigns_with_all(&[]), vec![Campaign::all()]);
    }
}
