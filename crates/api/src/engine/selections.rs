//! The selection toggle engine.

use std::sync::Arc;

use trendboard_core::actions::ToggleAction;
use trendboard_core::error::CoreError;
use trendboard_db::models::selection::SelectionEntry;
use trendboard_db::repositories::SelectionRepo;
use trendboard_db::DbPool;

use crate::cache::SelectionCache;

/// Result of one toggle: the action taken, the resolved row key, and the
/// authoritative post-toggle snapshot.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub row_key: String,
    pub selections: Vec<SelectionEntry>,
}

/// Executes selection toggles against the store and keeps the shared cache
/// in sync.
pub struct SelectionEngine {
    pool: DbPool,
    cache: Arc<SelectionCache>,
}

impl SelectionEngine {
    pub fn new(pool: DbPool, cache: Arc<SelectionCache>) -> Self {
        Self { pool, cache }
    }

    /// Atomically flip the user's selection for one row.
    ///
    /// `row_key` falls back to the keyword text when absent or blank, which
    /// preserves one-selection-per-keyword-text behaviour for older clients.
    ///
    /// Missing required fields are rejected before any store access. A store
    /// failure is not an `Err`: it maps to [`ToggleAction::Error`] together
    /// with the last known-good snapshot (never an empty snapshot if a cache
    /// exists), and leaves both store and cache in their previous state.
    pub async fn toggle(
        &self,
        username: &str,
        team: &str,
        keyword: &str,
        row_key: Option<&str>,
    ) -> Result<ToggleOutcome, CoreError> {
        let username = username.trim();
        let team = team.trim();
        let keyword = keyword.trim();

        if username.is_empty() || team.is_empty() || keyword.is_empty() {
            return Err(CoreError::Validation(
                "username, team and keyword are required".into(),
            ));
        }

        let row_key = match row_key.map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => keyword.to_string(),
        };

        match self.apply(username, team, keyword, &row_key).await {
            Ok((action, selections)) => Ok(ToggleOutcome {
                action,
                row_key,
                selections,
            }),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    username,
                    row_key = %row_key,
                    "Selection toggle failed"
                );
                Ok(ToggleOutcome {
                    action: ToggleAction::Error,
                    row_key,
                    selections: self.cache.last_known().await.unwrap_or_default(),
                })
            }
        }
    }

    /// Run the mutation, then rebuild the snapshot wholesale and swap it in.
    async fn apply(
        &self,
        username: &str,
        team: &str,
        keyword: &str,
        row_key: &str,
    ) -> Result<(ToggleAction, Vec<SelectionEntry>), sqlx::Error> {
        let action = SelectionRepo::toggle(&self.pool, username, team, keyword, row_key).await?;

        let snapshot = SelectionRepo::list_all(&self.pool).await?;
        self.cache.replace(snapshot.clone()).await;

        tracing::info!(
            username,
            team,
            keyword,
            row_key,
            action = action.as_str(),
            total = snapshot.len(),
            "Selection toggled"
        );
        Ok((action, snapshot))
    }
}
