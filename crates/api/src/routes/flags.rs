//! Route definitions for the `/trends-flags` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flags;
use crate::state::AppState;

/// Routes mounted at `/trends-flags`.
///
/// ```text
/// GET /?team=... -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(flags::list))
}
