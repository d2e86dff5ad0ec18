use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trendboard_api::cache::SelectionCache;
use trendboard_api::config::{ServerConfig, SheetConfig};
use trendboard_api::engine::{FlagEngine, SelectionEngine};
use trendboard_api::router::build_app_router;
use trendboard_api::sheets::SheetClient;
use trendboard_api::state::AppState;
use trendboard_api::ws::{PresenceRegistry, WsManager};
use trendboard_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no sheet credentials so keyword reads
/// serve the sample rows.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        password_min_length: 4,
        sheet: SheetConfig {
            sheet_id: None,
            api_key: None,
            range: "Sheet1".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Mirrors the state wiring in `main.rs` so integration tests exercise the
/// same middleware stack and services that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let cache = Arc::new(SelectionCache::new());

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::new(EventBus::default()),
        presence: Arc::new(PresenceRegistry::new()),
        cache: Arc::clone(&cache),
        selections: Arc::new(SelectionEngine::new(pool.clone(), cache)),
        flags: Arc::new(FlagEngine::new(pool.clone())),
        sheets: Arc::new(SheetClient::new(config.sheet.clone())),
    };

    build_app_router(state, &config)
}

/// GET a path and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    app.oneshot(request).await.expect("request should complete")
}

/// POST a JSON body to a path and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");
    app.oneshot(request).await.expect("request should complete")
}

/// Consume a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a response carries the standard `{ "error": ..., "code": ... }`
/// shape with the expected status.
pub async fn assert_error_response(
    response: Response<Body>,
    status: StatusCode,
    code: &str,
) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string(), "error message must be present");
    json
}
