//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /verify                        -> verify
/// GET  /stats                         -> stats
/// GET  /users                         -> users
/// GET  /users/{username}/selections   -> user_selections
/// POST /set-admin                     -> set_admin (admin only)
/// GET  /flagged-clicks                -> flagged_clicks
/// GET  /seo-stats                     -> seo_stats
/// GET  /today-selections              -> today_selections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify", post(admin::verify))
        .route("/stats", get(admin::stats))
        .route("/users", get(admin::users))
        .route("/users/{username}/selections", get(admin::user_selections))
        .route("/set-admin", post(admin::set_admin))
        .route("/flagged-clicks", get(admin::flagged_clicks))
        .route("/seo-stats", get(admin::seo_stats))
        .route("/today-selections", get(admin::today_selections))
}
