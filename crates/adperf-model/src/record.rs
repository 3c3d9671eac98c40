//! Raw input rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header names recognized in performance exports.
pub mod columns {
    pub const ADVERTISER: &str = "Advertiser";
    pub const CAMPAIGN: &str = "Campaign";
    pub const MEDIA_TYPE: &str = "Media Type";
    pub const PUBLISHER_NAME: &str = "Publisher Name";
    pub const PUBLISHER_TAIL: &str = "Publisher Name (with tail aggregation)";
    pub const SITE: &str = "Site";
    pub const PUBLISHER_ID: &str = "Publisher ID";
    pub const BIDS: &str = "Bids";
    pub const IMPRESSIONS: &str = "Impressions";
    pub const ADVERTISER_COST: &str = "Advertiser Cost (Adv Currency)";
    pub const CPM: &str = "CPM";
    pub const AD_PLAYS: &str = "Ad Plays";
    pub const PLAYER_COMPLETED_VIEWS: &str = "Player Completed Views";
    pub const PLAYER_STARTS: &str = "Player Starts";

    /// Columns that must be present for a file to be accepted, in reporting order.
    pub const REQUIRED: [&str; 4] = [PUBLISHER_NAME, IMPRESSIONS, ADVERTISER_COST, CAMPAIGN];
}

/// One row of a performance export.
///
/// Numeric columns keep their source text (`"48,421"`); conversion happens
/// when records are aggregated. Columns outside the recognized set are kept
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Advertiser", default, skip_serializing_if = "Option::is_none")]
    pub advertiser: Option<String>,
    #[serde(rename = "Campaign", default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(rename = "Media Type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Publisher Name", default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(
        rename = "Publisher Name (with tail aggregation)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub publisher_tail: Option<String>,
    #[serde(rename = "Site", default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(rename = "Publisher ID", default, skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,
    #[serde(rename = "Bids", default, skip_serializing_if = "Option::is_none")]
    pub bids: Option<String>,
    #[serde(rename = "Impressions", default, skip_serializing_if = "Option::is_none")]
    pub impressions: Option<String>,
    #[serde(
        rename = "Advertiser Cost (Adv Currency)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub advertiser_cost: Option<String>,
    #[serde(rename = "CPM", default, skip_serializing_if = "Option::is_none")]
    pub reported_cpm: Option<String>,
    #[serde(rename = "Ad Plays", default, skip_serializing_if = "Option::is_none")]
    pub ad_plays: Option<String>,
    #[serde(
        rename = "Player Completed Views",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub player_completed_views: Option<String>,
    #[serde(rename = "Player Starts", default, skip_serializing_if = "Option::is_none")]
    pub player_starts: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl RawRecord {
    /// Stores a cell under its header name.
    pub fn set(&mut self, header: &str, value: String) {
        let slot = match header {
            columns::ADVERTISER => &mut self.advertiser,
            columns::CAMPAIGN => &mut self.campaign,
            columns::MEDIA_TYPE => &mut self.media_type,
            columns::PUBLISHER_NAME => &mut self.publisher_name,
            columns::PUBLISHER_TAIL => &mut self.publisher_tail,
            columns::SITE => &mut self.site,
            columns::PUBLISHER_ID => &mut self.publisher_id,
            columns::BIDS => &mut self.bids,
            columns::IMPRESSIONS => &mut self.impressions,
            columns::ADVERTISER_COST => &mut self.advertiser_cost,
            columns::CPM => &mut self.reported_cpm,
            columns::AD_PLAYS => &mut self.ad_plays,
            columns::PLAYER_COMPLETED_VIEWS => &mut self.player_completed_views,
            columns::PLAYER_STARTS => &mut self.player_starts,
            _ => {
                self.extra.insert(header.to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    /// Returns the cell stored under a header name.
    pub fn get(&self, header: &str) -> Option<&str> {
        let slot = match header {
            columns::ADVERTISER => &self.advertiser,
            columns::CAMPAIGN => &self.campaign,
            columns::MEDIA_TYPE => &self.media_type,
            columns::PUBLISHER_NAME => &self.publisher_name,
            columns::PUBLISHER_TAIL => &self.publisher_tail,
            columns::SITE => &self.site,
            columns::PUBLISHER_ID => &self.publisher_id,
            columns::BIDS => &self.bids,
            columns::IMPRESSIONS => &self.impressions,
            columns::ADVERTISER_COST => &self.advertiser_cost,
            columns::CPM => &self.reported_cpm,
            columns::AD_PLAYS => &self.ad_plays,
            columns::PLAYER_COMPLETED_VIEWS => &self.player_completed_views,
            columns::PLAYER_STARTS => &self.player_starts,
            _ => return self.extra.get(header).map(String::as_str),
        };
        slot.as_deref()
    }

    /// Campaign value as stored, or `""` when the cell is missing.
    pub fn campaign(&self) -> &str {
        self.campaign.as_deref().unwrap_or("")
    }

    /// Grouping key for aggregation.
    ///
    /// A non-empty tail-aggregated alias wins, otherwise the plain publisher
    /// name is used. Keys that are blank after trimming resolve to `None`, so a
    /// whitespace-only alias drops the row.
    pub fn publisher_key(&self) -> Option<&str> {
        let tail = self
            .publisher_tail
            .as_deref()
            .filter(|value| !value.is_empty());
        tail.or(self.publisher_name.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}
