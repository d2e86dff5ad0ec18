//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover registration, duplicate usernames, login, and the
//! team-checked password reset.

mod common;

use axum::http::StatusCode;
use common::{assert_error_response, body_json, post_json};
use sqlx::PgPool;

/// Register a user through the API and return the profile JSON.
async fn register(app: axum::Router, name: &str, team: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "name": name, "team": team, "password": password });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Successful registration returns the profile without any password material.
#[sqlx::test(migrations = "../../migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = register(app, "alice", "Alpha", "s3cret").await;

    assert_eq!(json["data"]["name"], "alice");
    assert_eq!(json["data"]["team"], "Alpha");
    assert_eq!(json["data"]["is_admin"], false);
    assert!(
        json["data"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// Registering an existing username returns 409.
#[sqlx::test(migrations = "../../migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    let app = common::build_test_app(pool);

    register(app.clone(), "alice", "Alpha", "s3cret").await;

    let body = serde_json::json!({ "name": "alice", "team": "Beta", "password": "other" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_error_response(response, StatusCode::CONFLICT, "CONFLICT").await;
}

/// Too-short passwords and blank names are rejected with 400.
#[sqlx::test(migrations = "../../migrations")]
async fn test_register_validation(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "alice", "team": "Alpha", "password": "abc" });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let body = serde_json::json!({ "name": "  ", "team": "Alpha", "password": "s3cret" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

/// Login succeeds with the right password and returns the profile.
#[sqlx::test(migrations = "../../migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "bob", "Beta", "hunter22").await;

    let body = serde_json::json!({ "name": "bob", "password": "hunter22" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "bob");
    assert_eq!(json["data"]["team"], "Beta");
}

/// Login with the wrong password returns 401.
#[sqlx::test(migrations = "../../migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "bob", "Beta", "hunter22").await;

    let body = serde_json::json!({ "name": "bob", "password": "wrong" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_error_response(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

/// Login for an unknown user returns 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_error_response(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

/// Password reset works when the stated team matches, case-insensitively.
#[sqlx::test(migrations = "../../migrations")]
async fn test_reset_password_with_matching_team(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "carol", "Gamma", "oldpass").await;

    let body = serde_json::json!({ "name": "carol", "team": "gamma", "new_password": "newpass" });
    let response = post_json(app.clone(), "/api/v1/auth/reset-password", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works, new one does.
    let body = serde_json::json!({ "name": "carol", "password": "oldpass" });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = serde_json::json!({ "name": "carol", "password": "newpass" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Password reset with the wrong team returns 403 and changes nothing.
#[sqlx::test(migrations = "../../migrations")]
async fn test_reset_password_wrong_team(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "carol", "Gamma", "oldpass").await;

    let body = serde_json::json!({ "name": "carol", "team": "Delta", "new_password": "newpass" });
    let response = post_json(app.clone(), "/api/v1/auth/reset-password", body).await;
    assert_error_response(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;

    let body = serde_json::json!({ "name": "carol", "password": "oldpass" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}
