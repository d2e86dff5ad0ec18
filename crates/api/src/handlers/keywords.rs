//! Handlers for the `/keywords` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use trendboard_core::source_row::SourceRow;
use trendboard_db::models::selection::SelectionEntry;
use trendboard_db::repositories::SelectionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Per-keyword selection breakdown.
#[derive(Debug, Serialize)]
pub struct KeywordSelections {
    pub keyword: String,
    pub total_selections: usize,
    pub users: Vec<SelectionEntry>,
}

/// GET /keywords
///
/// Current trending rows from the external sheet (or the sample fallback).
pub async fn list(State(state): State<AppState>) -> Json<DataResponse<Vec<SourceRow>>> {
    let rows = state.sheets.fetch_rows().await;
    Json(DataResponse { data: rows })
}

/// GET /keywords/{keyword}/selections
///
/// Everyone who currently has a selection on the given keyword, newest first.
pub async fn selections_for_keyword(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> AppResult<Json<DataResponse<KeywordSelections>>> {
    let users = SelectionRepo::list_for_keyword(&state.pool, &keyword).await?;
    Ok(Json(DataResponse {
        data: KeywordSelections {
            total_selections: users.len(),
            keyword,
            users,
        },
    }))
}
