use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Wire names are camelCase for compatibility with the existing dashboard
// client; database columns stay snake_case.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteRow {
    pub id: i32,
    pub user_id: i32,
    pub domain: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebsite {
    pub user_id: i32,
    pub domain: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRow {
    pub id: i32,
    pub website_id: i32,
    pub keyword: String,
    pub target_url: Option<String>,
    pub current_position: Option<i32>,
    pub previous_position: Option<i32>,
    pub search_volume: Option<i32>,
    pub difficulty: Option<i32>,
    pub is_tracked: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKeyword {
    pub website_id: i32,
    pub keyword: String,
    #[serde(default)]
    pub target_url: Option<String>,
    #[serde(default)]
    pub current_position: Option<i32>,
    #[serde(default)]
    pub search_volume: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BacklinkRow {
    pub id: i32,
    pub website_id: i32,
    pub source_url: String,
    pub target_url: String,
    pub anchor_text: Option<String>,
    pub domain_authority: Option<i32>,
    pub status: String,
    pub is_nofollow: bool,
    pub found_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewBacklink {
    pub website_id: i32,
    pub source_url: String,
    pub target_url: String,
    pub anchor_text: Option<String>,
    pub domain_authority: Option<i32>,
    pub status: BacklinkStatus,
    pub is_nofollow: bool,
}

/// Backlink review status. Transitions are one-way: pending → approved|rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BacklinkStatus {
    Pending,
    Approved,
    Rejected,
}

impl BacklinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BacklinkStatus::Pending => "pending",
            BacklinkStatus::Approved => "approved",
            BacklinkStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BacklinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BacklinkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BacklinkStatus::Pending),
            "approved" => Ok(BacklinkStatus::Approved),
            "rejected" => Ok(BacklinkStatus::Rejected),
            other => Err(format!("unknown backlink status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_known_values() {
        for status in [
            BacklinkStatus::Pending,
            BacklinkStatus::Approved,
            BacklinkStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<BacklinkStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("deleted".parse::<BacklinkStatus>().is_err());
        assert!("Pending".parse::<BacklinkStatus>().is_err());
        assert!("".parse::<BacklinkStatus>().is_err());
    }
}
