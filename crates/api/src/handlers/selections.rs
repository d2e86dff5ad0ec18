//! Handlers for the `/selections` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trendboard_db::models::selection::SelectionEntry;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for `POST /selections/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResult {
    /// Number of selections in the rebuilt snapshot.
    pub count: usize,
}

/// GET /selections
///
/// The full current selection snapshot, served from the cache (loading it
/// from the database on first use).
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SelectionEntry>>>> {
    let selections = state.cache.get_or_load(&state.pool).await?;
    Ok(Json(DataResponse { data: selections }))
}

/// POST /selections/refresh
///
/// Force-rebuild the selection cache from the database.
pub async fn refresh(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<RefreshResult>>> {
    let count = state.cache.refresh(&state.pool).await?;
    tracing::info!(count, "Selection cache refreshed");
    Ok(Json(DataResponse {
        data: RefreshResult { count },
    }))
}
