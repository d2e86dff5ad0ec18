//! Handlers for the `/admin` resource: dashboards, user management, and
//! SEO performance reporting.

use std::collections::{BTreeMap, HashSet};

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trendboard_core::error::CoreError;
use trendboard_db::models::flag::FlaggedKeyword;
use trendboard_db::models::selection::SelectionEntry;
use trendboard_db::models::stats::{AdminStats, UserWithStats};
use trendboard_db::repositories::{FlagRepo, SelectionRepo, StatsRepo, UserRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub username: String,
}

/// Response for `POST /admin/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub username: String,
    pub is_admin: bool,
}

/// Optional inclusive date range accepted by the reporting endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

/// Request body for `POST /admin/set-admin`.
#[derive(Debug, Deserialize)]
pub struct SetAdminRequest {
    /// User performing the change. Must already be an admin.
    pub requester: String,
    pub username: String,
    pub is_admin: bool,
}

/// One sheet row in an SEO breakdown.
#[derive(Debug, Serialize)]
pub struct SeoKeyword {
    pub keyword: String,
    pub title: String,
    pub date: String,
    pub selected: bool,
}

/// Aggregated performance of one SEO (sheet author).
#[derive(Debug, Serialize)]
pub struct SeoStat {
    pub seo: String,
    pub total_posted: usize,
    pub total_selected: usize,
    pub keywords: Vec<SeoKeyword>,
}

/// Response for `GET /admin/flagged-clicks`.
#[derive(Debug, Serialize)]
pub struct FlaggedClicks {
    pub count: usize,
    pub flags: Vec<FlaggedKeyword>,
}

/// Response for `GET /admin/today-selections`.
#[derive(Debug, Serialize)]
pub struct TodaySelections {
    pub selections: Vec<SelectionEntry>,
    pub unique_users: usize,
    pub unique_keywords: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /admin/verify
///
/// Check whether a username has admin rights. Unknown users report `false`.
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyRequest>,
) -> AppResult<Json<DataResponse<VerifyResponse>>> {
    let is_admin = UserRepo::is_admin(&state.pool, &input.username).await?;
    Ok(Json(DataResponse {
        data: VerifyResponse {
            username: input.username,
            is_admin,
        },
    }))
}

/// GET /admin/stats?from_date=...&to_date=...
///
/// Dashboard aggregates, optionally bounded by an inclusive date range.
pub async fn stats(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> AppResult<Json<DataResponse<AdminStats>>> {
    let stats = StatsRepo::admin_stats(&state.pool, range.from_date, range.to_date).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /admin/users
///
/// Every user with their selection activity, most active first.
pub async fn users(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserWithStats>>>> {
    let users = UserRepo::list_with_stats(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /admin/users/{username}/selections?from_date=...&to_date=...
///
/// One user's selection history, newest first.
pub async fn user_selections(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(range): Query<DateRangeQuery>,
) -> AppResult<Json<DataResponse<Vec<SelectionEntry>>>> {
    if !UserRepo::exists(&state.pool, &username).await? {
        return Err(CoreError::NotFound {
            entity: "User",
            key: username,
        }
        .into());
    }
    let selections =
        SelectionRepo::list_for_user(&state.pool, &username, range.from_date, range.to_date)
            .await?;
    Ok(Json(DataResponse { data: selections }))
}

/// POST /admin/set-admin
///
/// Grant or revoke admin rights. Only an existing admin may do this.
pub async fn set_admin(
    State(state): State<AppState>,
    Json(input): Json<SetAdminRequest>,
) -> AppResult<Json<DataResponse<VerifyResponse>>> {
    if !UserRepo::is_admin(&state.pool, &input.requester).await? {
        return Err(CoreError::Forbidden("Unauthorized".into()).into());
    }

    let updated = UserRepo::set_admin(&state.pool, &input.username, input.is_admin).await?;
    if !updated {
        return Err(CoreError::NotFound {
            entity: "User",
            key: input.username,
        }
        .into());
    }

    tracing::info!(
        requester = %input.requester,
        user = %input.username,
        is_admin = input.is_admin,
        "Admin status changed"
    );
    Ok(Json(DataResponse {
        data: VerifyResponse {
            username: input.username,
            is_admin: input.is_admin,
        },
    }))
}

/// GET /admin/flagged-clicks
///
/// Every active trend flag across all teams, newest first.
pub async fn flagged_clicks(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<FlaggedClicks>>> {
    let flags: Vec<FlaggedKeyword> = FlagRepo::list_all(&state.pool)
        .await?
        .into_iter()
        .map(FlaggedKeyword::from)
        .collect();
    Ok(Json(DataResponse {
        data: FlaggedClicks {
            count: flags.len(),
            flags,
        },
    }))
}

/// GET /admin/seo-stats?from_date=...&to_date=...
///
/// Per-SEO posting and selection counts over the sheet rows. Without an
/// explicit range only today's rows are counted.
pub async fn seo_stats(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> AppResult<Json<DataResponse<Vec<SeoStat>>>> {
    let rows = state.sheets.fetch_rows().await;
    let selections = state.cache.get_or_load(&state.pool).await?;

    // Selections store either the composite row key or, for old rows, the
    // bare keyword. Match on both.
    let selected_keys: HashSet<&str> = selections.iter().map(|s| s.row_key.as_str()).collect();
    let selected_keywords: HashSet<&str> = selections.iter().map(|s| s.keyword.as_str()).collect();

    let today = chrono::Utc::now().date_naive();
    let from = range.from_date.unwrap_or(today);
    let to = range.to_date.unwrap_or(today);

    let mut by_seo: BTreeMap<String, SeoStat> = BTreeMap::new();
    for row in &rows {
        let Some(date) = parse_sheet_date(&row.date) else {
            continue;
        };
        if date < from || date > to {
            continue;
        }

        let key = row.row_key().to_string();
        let selected =
            selected_keys.contains(key.as_str()) || selected_keywords.contains(row.keyword.as_str());

        let seo = if row.seo.is_empty() {
            "Unassigned".to_string()
        } else {
            row.seo.clone()
        };
        let entry = by_seo.entry(seo.clone()).or_insert_with(|| SeoStat {
            seo,
            total_posted: 0,
            total_selected: 0,
            keywords: Vec::new(),
        });
        entry.total_posted += 1;
        if selected {
            entry.total_selected += 1;
        }
        entry.keywords.push(SeoKeyword {
            keyword: row.keyword.clone(),
            title: row.title.clone(),
            date: row.date.clone(),
            selected,
        });
    }

    let mut stats: Vec<SeoStat> = by_seo.into_values().collect();
    stats.sort_by(|a, b| b.total_posted.cmp(&a.total_posted));
    Ok(Json(DataResponse { data: stats }))
}

/// GET /admin/today-selections
///
/// Everything selected today, with distinct user and keyword counts.
pub async fn today_selections(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TodaySelections>>> {
    let selections = SelectionRepo::list_today(&state.pool).await?;
    let unique_users = selections
        .iter()
        .map(|s| s.user.as_str())
        .collect::<HashSet<_>>()
        .len();
    let unique_keywords = selections
        .iter()
        .map(|s| s.keyword.as_str())
        .collect::<HashSet<_>>()
        .len();
    Ok(Json(DataResponse {
        data: TodaySelections {
            selections,
            unique_users,
            unique_keywords,
        },
    }))
}

/// Parse a sheet date cell. The sheet is hand-edited, so several formats
/// show up in practice.
fn parse_sheet_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 5] = ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%y", "%d/%m/%y"];
    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_sheet_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(parse_sheet_date("05-01-2026"), Some(expected));
        assert_eq!(parse_sheet_date("05/01/2026"), Some(expected));
        assert_eq!(parse_sheet_date("2026-01-05"), Some(expected));
        assert_eq!(parse_sheet_date(" 05-01-26 "), Some(expected));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_sheet_date(""), None);
        assert_eq!(parse_sheet_date("yesterday"), None);
        assert_eq!(parse_sheet_date("32-01-2026"), None);
    }
}
