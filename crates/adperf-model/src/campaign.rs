use serde::{Deserialize, Serialize};

/// Identifier of the synthetic "no filter" campaign.
pub const ALL_CAMPAIGNS_ID: &str = "all";
/// Display name of the synthetic "no filter" campaign.
pub const ALL_CAMPAIGNS_NAME: &str = "All Campaigns";

/// A selectable campaign filter. Real campaigns use their name as id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
}

impl Campaign {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }

    /// The "All Campaigns" sentinel.
    pub fn all() -> Self {
        Self {
            id: ALL_CAMPAIGNS_ID.to_string(),
            name: ALL_CAMPAIGNS_NAME.to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CAMPAIGNS_ID
    }
}
