//! Trend-flag entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trendboard_core::types::{DbId, Timestamp};

/// Full flag row from the `trend_flags` table.
///
/// At most one row exists per (keyword, team); `flagged_by` records whichever
/// team member set the current flag.
#[derive(Debug, Clone, FromRow)]
pub struct TrendFlag {
    pub id: DbId,
    pub keyword: String,
    pub flagged_by: String,
    pub team: String,
    pub flagged_at: Timestamp,
}

/// Wire-facing flag details sent in broadcasts and flag listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagInfo {
    pub flagged_by: String,
    pub flagged_at: Timestamp,
    pub team: String,
}

impl From<TrendFlag> for FlagInfo {
    fn from(flag: TrendFlag) -> Self {
        FlagInfo {
            flagged_by: flag.flagged_by,
            flagged_at: flag.flagged_at,
            team: flag.team,
        }
    }
}

/// One entry of the cross-team flag listing on the admin panel. Unlike
/// [`FlagInfo`] it carries the keyword, since the listing is not keyed by it.
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedKeyword {
    pub keyword: String,
    pub flagged_by: String,
    pub team: String,
    pub flagged_at: Timestamp,
}

impl From<TrendFlag> for FlaggedKeyword {
    fn from(flag: TrendFlag) -> Self {
        FlaggedKeyword {
            keyword: flag.keyword,
            flagged_by: flag.flagged_by,
            team: flag.team,
            flagged_at: flag.flagged_at,
        }
    }
}
