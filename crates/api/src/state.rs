use std::sync::Arc;

use trendboard_events::EventBus;

use crate::cache::SelectionCache;
use crate::config::ServerConfig;
use crate::engine::{FlagEngine, SelectionEngine};
use crate::sheets::SheetClient;
use crate::ws::{PresenceRegistry, WsManager};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trendboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager.
    pub ws_manager: Arc<WsManager>,
    /// Event bus feeding the broadcast task.
    pub event_bus: Arc<EventBus>,
    /// Ephemeral set of online usernames.
    pub presence: Arc<PresenceRegistry>,
    /// The shared selection snapshot cache.
    pub cache: Arc<SelectionCache>,
    /// Selection toggle engine (store mutation + cache refresh).
    pub selections: Arc<SelectionEngine>,
    /// Team-scoped trend-flag toggle engine.
    pub flags: Arc<FlagEngine>,
    /// Spreadsheet source-row provider.
    pub sheets: Arc<SheetClient>,
}
