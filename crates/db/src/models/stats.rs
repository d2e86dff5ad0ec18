//! Aggregate shapes for the admin dashboard.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use trendboard_core::types::{DbId, Timestamp};

/// Selection count for one team.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TeamCount {
    pub team: String,
    pub count: i64,
}

/// Selection count for one calendar day.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// One of the most active users.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopUser {
    pub username: String,
    pub team: String,
    pub count: i64,
}

/// One of the most selected keywords.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopKeyword {
    pub keyword: String,
    pub count: i64,
}

/// Full admin dashboard statistics payload.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_selections: i64,
    pub team_stats: Vec<TeamCount>,
    pub daily_stats: Vec<DailyCount>,
    pub top_users: Vec<TopUser>,
    pub top_keywords: Vec<TopKeyword>,
}

/// User list entry with selection activity, for the admin user table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserWithStats {
    pub id: DbId,
    pub username: String,
    pub team: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub total_selections: i64,
    pub last_selection: Option<Timestamp>,
}
