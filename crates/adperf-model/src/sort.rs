use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Column a publisher table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Rank,
    Publisher,
    Impressions,
    Spend,
    Cpm,
    SpendPercentage,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        Self::Rank,
        Self::Publisher,
        Self::Impressions,
        Self::Spend,
        Self::Cpm,
        Self::SpendPercentage,
    ];

    /// Wire spelling used by table headers and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Publisher => "publisher",
            Self::Impressions => "impressions",
            Self::Spend => "spend",
            Self::Cpm => "cpm",
            Self::SpendPercentage => "spendPercentage",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Publisher)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ModelError::UnknownSortDirection(other.to_string())),
        }
    }
}
