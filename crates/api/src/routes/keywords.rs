//! Route definitions for the `/keywords` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::keywords;
use crate::state::AppState;

/// Routes mounted at `/keywords`.
///
/// ```text
/// GET /                        -> list
/// GET /{keyword}/selections    -> selections_for_keyword
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(keywords::list))
        .route(
            "/{keyword}/selections",
            get(keywords::selections_for_keyword),
        )
}
