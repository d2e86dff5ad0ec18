//! Handlers for the `/trends-flags` resource.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use trendboard_db::models::flag::FlagInfo;
use trendboard_db::repositories::FlagRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /trends-flags`.
#[derive(Debug, Deserialize)]
pub struct FlagsQuery {
    pub team: Option<String>,
}

/// Flag state for one team, keyed by keyword.
#[derive(Debug, Serialize)]
pub struct TeamFlags {
    pub team: String,
    pub flags: BTreeMap<String, FlagInfo>,
}

/// GET /trends-flags?team=...
///
/// All active trend flags for the given team. Flags are team-scoped, so the
/// `team` parameter is required.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FlagsQuery>,
) -> AppResult<Json<DataResponse<TeamFlags>>> {
    let team = params
        .team
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter: team".into()))?
        .to_string();

    let rows = FlagRepo::list_for_team(&state.pool, &team).await?;
    let flags = rows
        .into_iter()
        .map(|flag| (flag.keyword.clone(), FlagInfo::from(flag)))
        .collect();

    Ok(Json(DataResponse {
        data: TeamFlags { team, flags },
    }))
}
