//! Route definitions for the `/selections` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::selections;
use crate::state::AppState;

/// Routes mounted at `/selections`.
///
/// ```text
/// GET  /         -> list
/// POST /refresh  -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(selections::list))
        .route("/refresh", post(selections::refresh))
}
