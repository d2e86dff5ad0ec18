//! Repository for the `keyword_selections` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use trendboard_core::actions::ToggleAction;

use crate::models::selection::SelectionEntry;

/// Column list shared across snapshot queries to avoid repetition.
const COLUMNS: &str = "username, team, keyword, row_key, selected_at";

/// Provides the toggle mutation and snapshot reads for selections.
pub struct SelectionRepo;

impl SelectionRepo {
    /// Flip membership of `(username, row_key)` in a single transaction.
    ///
    /// Deletes the matching row if it exists ([`ToggleAction::Deselected`]);
    /// otherwise inserts a new row with a server-assigned timestamp
    /// ([`ToggleAction::Selected`]). Two racing toggles for the same pair are
    /// serialized by the store: the loser of an insert race hits the
    /// `uq_keyword_selections_username_row_key` constraint and surfaces as
    /// `Err`, never as duplicated state.
    pub async fn toggle(
        pool: &PgPool,
        username: &str,
        team: &str,
        keyword: &str,
        row_key: &str,
    ) -> Result<ToggleAction, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<i64> = sqlx::query_scalar(
            "DELETE FROM keyword_selections WHERE username = $1 AND row_key = $2 RETURNING id",
        )
        .bind(username)
        .bind(row_key)
        .fetch_optional(&mut *tx)
        .await?;

        let action = if deleted.is_some() {
            ToggleAction::Deselected
        } else {
            sqlx::query(
                "INSERT INTO keyword_selections (username, team, keyword, row_key)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(username)
            .bind(team)
            .bind(keyword)
            .bind(row_key)
            .execute(&mut *tx)
            .await?;
            ToggleAction::Selected
        };

        tx.commit().await?;
        Ok(action)
    }

    /// Read the full selection table, newest first (the snapshot query).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SelectionEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM keyword_selections ORDER BY selected_at DESC, id DESC"
        );
        sqlx::query_as::<_, SelectionEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// All selections of a keyword (by display text, across row keys).
    pub async fn list_for_keyword(
        pool: &PgPool,
        keyword: &str,
    ) -> Result<Vec<SelectionEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM keyword_selections
             WHERE keyword = $1
             ORDER BY selected_at DESC, id DESC"
        );
        sqlx::query_as::<_, SelectionEntry>(&query)
            .bind(keyword)
            .fetch_all(pool)
            .await
    }

    /// All selections of one user, optionally bounded by an inclusive date
    /// range (calendar days, server time).
    pub async fn list_for_user(
        pool: &PgPool,
        username: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<SelectionEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM keyword_selections
             WHERE username = $1
               AND ($2::date IS NULL OR selected_at >= $2::date)
               AND ($3::date IS NULL OR selected_at < $3::date + 1)
             ORDER BY selected_at DESC, id DESC"
        );
        sqlx::query_as::<_, SelectionEntry>(&query)
            .bind(username)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// All selections made today (server date).
    pub async fn list_today(pool: &PgPool) -> Result<Vec<SelectionEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM keyword_selections
             WHERE selected_at::date = CURRENT_DATE
             ORDER BY selected_at DESC, id DESC"
        );
        sqlx::query_as::<_, SelectionEntry>(&query)
            .fetch_all(pool)
            .await
    }
}
