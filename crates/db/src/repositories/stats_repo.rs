//! Aggregate queries for the admin dashboard.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::stats::{AdminStats, DailyCount, TeamCount, TopKeyword, TopUser};

/// Number of entries returned by the top-users / top-keywords queries.
const TOP_LIMIT: i64 = 10;

/// Number of days covered by the daily breakdown.
const DAILY_WINDOW_DAYS: i32 = 30;

/// Read-only reporting queries over users and selections.
pub struct StatsRepo;

impl StatsRepo {
    /// Assemble the full dashboard payload, optionally bounded by an
    /// inclusive date range on `selected_at`.
    pub async fn admin_stats(
        pool: &PgPool,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<AdminStats, sqlx::Error> {
        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_users")
            .fetch_one(pool)
            .await?;

        let total_selections: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM keyword_selections
             WHERE ($1::date IS NULL OR selected_at >= $1::date)
               AND ($2::date IS NULL OR selected_at < $2::date + 1)",
        )
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;

        let team_stats = sqlx::query_as::<_, TeamCount>(
            "SELECT team, COUNT(*) AS count FROM keyword_selections
             WHERE ($1::date IS NULL OR selected_at >= $1::date)
               AND ($2::date IS NULL OR selected_at < $2::date + 1)
             GROUP BY team
             ORDER BY count DESC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        let daily_stats = sqlx::query_as::<_, DailyCount>(
            "SELECT selected_at::date AS date, COUNT(*) AS count
             FROM keyword_selections
             WHERE selected_at >= CURRENT_DATE - $3
               AND ($1::date IS NULL OR selected_at >= $1::date)
               AND ($2::date IS NULL OR selected_at < $2::date + 1)
             GROUP BY selected_at::date
             ORDER BY date DESC",
        )
        .bind(from)
        .bind(to)
        .bind(DAILY_WINDOW_DAYS)
        .fetch_all(pool)
        .await?;

        let top_users = sqlx::query_as::<_, TopUser>(
            "SELECT username, team, COUNT(*) AS count FROM keyword_selections
             WHERE ($1::date IS NULL OR selected_at >= $1::date)
               AND ($2::date IS NULL OR selected_at < $2::date + 1)
             GROUP BY username, team
             ORDER BY count DESC
             LIMIT $3",
        )
        .bind(from)
        .bind(to)
        .bind(TOP_LIMIT)
        .fetch_all(pool)
        .await?;

        let top_keywords = sqlx::query_as::<_, TopKeyword>(
            "SELECT keyword, COUNT(*) AS count FROM keyword_selections
             WHERE ($1::date IS NULL OR selected_at >= $1::date)
               AND ($2::date IS NULL OR selected_at < $2::date + 1)
             GROUP BY keyword
             ORDER BY count DESC
             LIMIT $3",
        )
        .bind(from)
        .bind(to)
        .bind(TOP_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(AdminStats {
            total_users,
            total_selections,
            team_stats,
            daily_stats,
            top_users,
            top_keywords,
        })
    }
}
