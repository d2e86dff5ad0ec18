//! Repository for the `trend_flags` table.

use sqlx::PgPool;
use trendboard_core::actions::FlagAction;

use crate::models::flag::TrendFlag;

const COLUMNS: &str = "id, keyword, flagged_by, team, flagged_at";

/// Provides the team-scoped flag toggle and flag listings.
pub struct FlagRepo;

impl FlagRepo {
    /// Flip the team's flag for a keyword in a single transaction.
    ///
    /// If the team already has a flag for the keyword it is deleted,
    /// whichever team member set it (last toggle wins, no ownership
    /// transfer). Otherwise a new flag is inserted with `flagged_by =
    /// username` and a server-assigned timestamp, returned to the caller.
    pub async fn toggle(
        pool: &PgPool,
        keyword: &str,
        username: &str,
        team: &str,
    ) -> Result<(FlagAction, Option<TrendFlag>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM trend_flags WHERE keyword = $1 AND team = $2")
                .bind(keyword)
                .bind(team)
                .fetch_optional(&mut *tx)
                .await?;

        let result = if let Some(id) = existing {
            sqlx::query("DELETE FROM trend_flags WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            (FlagAction::Unflagged, None)
        } else {
            let query = format!(
                "INSERT INTO trend_flags (keyword, flagged_by, team)
                 VALUES ($1, $2, $3)
                 RETURNING {COLUMNS}"
            );
            let flag = sqlx::query_as::<_, TrendFlag>(&query)
                .bind(keyword)
                .bind(username)
                .bind(team)
                .fetch_one(&mut *tx)
                .await?;
            (FlagAction::Flagged, Some(flag))
        };

        tx.commit().await?;
        Ok(result)
    }

    /// All flags belonging to one team, newest first.
    ///
    /// Strictly team-scoped: another team's flags on the same keywords are
    /// never included.
    pub async fn list_for_team(pool: &PgPool, team: &str) -> Result<Vec<TrendFlag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trend_flags WHERE team = $1 ORDER BY flagged_at DESC"
        );
        sqlx::query_as::<_, TrendFlag>(&query)
            .bind(team)
            .fetch_all(pool)
            .await
    }

    /// Every active flag across all teams, newest first. Admin view only.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TrendFlag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trend_flags ORDER BY flagged_at DESC, id DESC");
        sqlx::query_as::<_, TrendFlag>(&query)
            .fetch_all(pool)
            .await
    }
}
