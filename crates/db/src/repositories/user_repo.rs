//! Repository for the `app_users` table.

use sqlx::PgPool;

use crate::models::stats::UserWithStats;
use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, team, password_hash, is_admin, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate username violates `uq_app_users_username` and surfaces as
    /// a database error; callers pre-check with [`UserRepo::exists`] for a
    /// friendlier message.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO app_users (username, team, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.team)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM app_users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Whether a username is already taken.
    pub async fn exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM app_users WHERE username = $1")
                .bind(username)
                .fetch_optional(pool)
                .await?;
        Ok(found.is_some())
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE app_users SET password_hash = $2 WHERE username = $1")
            .bind(username)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Grant or revoke admin status. Returns `true` if the user exists.
    pub async fn set_admin(
        pool: &PgPool,
        username: &str,
        is_admin: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE app_users SET is_admin = $2 WHERE username = $1")
            .bind(username)
            .bind(is_admin)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the user exists and is an admin.
    pub async fn is_admin(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        let is_admin: Option<bool> =
            sqlx::query_scalar("SELECT is_admin FROM app_users WHERE username = $1")
                .bind(username)
                .fetch_optional(pool)
                .await?;
        Ok(is_admin.unwrap_or(false))
    }

    /// List all users with their selection activity, most active first.
    pub async fn list_with_stats(pool: &PgPool) -> Result<Vec<UserWithStats>, sqlx::Error> {
        sqlx::query_as::<_, UserWithStats>(
            "SELECT
                u.id,
                u.username,
                u.team,
                u.is_admin,
                u.created_at,
                COUNT(ks.id) AS total_selections,
                MAX(ks.selected_at) AS last_selection
             FROM app_users u
             LEFT JOIN keyword_selections ks ON u.username = ks.username
             GROUP BY u.id, u.username, u.team, u.is_admin, u.created_at
             ORDER BY total_selections DESC",
        )
        .fetch_all(pool)
        .await
    }
}
