//! Campaign filtering ahead of aggregation.

use std::borrow::Cow;

use adperf_model::{ALL_CAMPAIGNS_ID, RawRecord};

/// Normalizes a campaign selection: the "all" sentinel means no filter.
pub fn campaign_filter(campaign: Option<&str>) -> Option<&str> {
    campaign.filter(|id| *id != ALL_CAMPAIGNS_ID)
}

/// Keeps only records of one campaign.
///
/// `None` or the "all" sentinel borrows the input unchanged. Otherwise the
/// raw campaign cell must equal `campaign` exactly; cells are not trimmed
/// and the match is case-sensitive.
pub fn filter_by_campaign<'a>(
    records: &'a [RawRecord],
    campaign: Option<&str>,
) -> Cow<'a, [RawRecord]> {
    match campaign_filter(campaign) {
        None => Cow::Borrowed(records),
        Some(campaign) => Cow::Owned(
            records
                .iter()
                .filter(|record| record.campaign.as_deref() == Some(campaign))
                .cloned()
                .collect(),
        ),
    }
}
