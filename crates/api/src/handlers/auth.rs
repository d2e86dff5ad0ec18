//! Handlers for the `/auth` resource (register, login, reset-password).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use trendboard_core::error::CoreError;
use trendboard_db::models::user::{CreateUser, UserProfile};
use trendboard_db::repositories::UserRepo;

use crate::auth::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub team: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub name: String,
    pub team: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create an account with username, team, and password.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let username = input.name.trim();
    let team = input.team.trim();
    if username.is_empty() || team.is_empty() {
        return Err(CoreError::Validation("Name and team are required".into()).into());
    }
    validate_password_strength(&input.password, state.config.password_min_length)
        .map_err(CoreError::Validation)?;

    if UserRepo::exists(&state.pool, username).await? {
        return Err(CoreError::Conflict("Username already exists".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            team: team.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user = %user.username, team = %user.team, "User registered");
    Ok(Json(DataResponse { data: UserProfile::from(user) }))
}

/// POST /auth/login
///
/// Authenticate with username + password. Returns the user's profile.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let username = input.name.trim();

    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "User",
            key: username.to_string(),
        })?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(CoreError::Unauthorized("Invalid password".into()).into());
    }

    tracing::info!(user = %user.username, "User logged in");
    Ok(Json(DataResponse { data: UserProfile::from(user) }))
}

/// POST /auth/reset-password
///
/// Reset a password. The stated team must match the account's team; that is
/// the only identity check, matching the trust model of the board.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let username = input.name.trim();

    validate_password_strength(&input.new_password, state.config.password_min_length)
        .map_err(CoreError::Validation)?;

    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "User",
            key: username.to_string(),
        })?;

    if !user.team.trim().eq_ignore_ascii_case(input.team.trim()) {
        return Err(CoreError::Forbidden("Team name doesn't match our records".into()).into());
    }

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    UserRepo::update_password(&state.pool, &user.username, &password_hash).await?;

    tracing::info!(user = %user.username, "Password reset");
    Ok(Json(DataResponse { data: UserProfile::from(user) }))
}
