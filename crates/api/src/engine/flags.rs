//! The trend-flag toggle engine.

use trendboard_core::actions::FlagAction;
use trendboard_core::error::CoreError;
use trendboard_db::models::flag::FlagInfo;
use trendboard_db::repositories::FlagRepo;
use trendboard_db::DbPool;

/// Result of one flag toggle. `flag_info` is `Some` only when a flag was
/// created.
#[derive(Debug, Clone)]
pub struct FlagOutcome {
    pub action: FlagAction,
    pub flag_info: Option<FlagInfo>,
    pub team: String,
}

/// Executes team-scoped trend-flag toggles against the store.
///
/// No cache: flag reads for a team go to the store each time, bounded by the
/// team filter.
pub struct FlagEngine {
    pool: DbPool,
}

impl FlagEngine {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Flip the team's flag for a keyword.
    ///
    /// One flag per (keyword, team), independent of which team member set
    /// it: toggling a flag a teammate created removes it rather than
    /// transferring ownership. Store failures map to [`FlagAction::Error`]
    /// with no flag info.
    pub async fn toggle(
        &self,
        keyword: &str,
        username: &str,
        team: &str,
    ) -> Result<FlagOutcome, CoreError> {
        let keyword = keyword.trim();
        let username = username.trim();
        let team = team.trim();

        if keyword.is_empty() || username.is_empty() || team.is_empty() {
            return Err(CoreError::Validation(
                "keyword, username and team are required".into(),
            ));
        }

        match FlagRepo::toggle(&self.pool, keyword, username, team).await {
            Ok((action, flag)) => {
                tracing::info!(
                    keyword,
                    username,
                    team,
                    action = action.as_str(),
                    "Trend flag toggled"
                );
                Ok(FlagOutcome {
                    action,
                    flag_info: flag.map(FlagInfo::from),
                    team: team.to_string(),
                })
            }
            Err(e) => {
                tracing::error!(error = %e, keyword, team, "Trend flag toggle failed");
                Ok(FlagOutcome {
                    action: FlagAction::Error,
                    flag_info: None,
                    team: team.to_string(),
                })
            }
        }
    }
}
