//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trendboard_core::types::{DbId, Timestamp};

/// Full user row from the `app_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub team: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub team: String,
    pub is_admin: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            name: user.username,
            team: user.team,
            is_admin: user.is_admin,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub team: String,
    pub password_hash: String,
}
