pub mod admin;
pub mod auth;
pub mod flags;
pub mod health;
pub mod keywords;
pub mod selections;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                     WebSocket
///
/// /auth/register                          register
/// /auth/login                             login
/// /auth/reset-password                    reset password (team check)
///
/// /keywords                               current sheet rows
/// /keywords/{keyword}/selections          who selected a keyword
///
/// /selections                             full selection snapshot (cached)
/// /selections/refresh                     rebuild the cache (POST)
///
/// /trends-flags?team=...                  active flags for a team
///
/// /admin/verify                           check admin status (POST)
/// /admin/stats                            dashboard aggregates
/// /admin/users                            users with activity
/// /admin/users/{username}/selections      one user's history
/// /admin/set-admin                        grant/revoke admin (POST, admin only)
/// /admin/flagged-clicks                   all flags across teams
/// /admin/seo-stats                        per-SEO performance
/// /admin/today-selections                 today's activity
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/auth", auth::router())
        .nest("/keywords", keywords::router())
        .nest("/selections", selections::router())
        .nest("/trends-flags", flags::router())
        .nest("/admin", admin::router())
}
