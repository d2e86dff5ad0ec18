//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`BoardEvent`]s. The toggle
//! engines and presence handlers publish; the WebSocket broadcaster task is
//! the subscriber that fans events out to connected clients. It is designed
//! to be shared via `Arc<EventBus>` across the application.

use serde::Serialize;
use tokio::sync::broadcast;
use trendboard_core::actions::{FlagAction, ToggleAction};
use trendboard_core::source_row::SourceRow;
use trendboard_db::models::flag::FlagInfo;
use trendboard_db::models::selection::SelectionEntry;

// ---------------------------------------------------------------------------
// BoardEvent
// ---------------------------------------------------------------------------

/// A domain event to fan out to every connected viewer.
///
/// The serialized form (tagged by `type`, snake_case variant names) is
/// exactly the server-to-client wire message, so the broadcaster only has to
/// serialize and send.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A selection was toggled. Carries the full refreshed snapshot, not a
    /// delta, so a client that missed events still converges.
    SelectionUpdate {
        selections: Vec<SelectionEntry>,
        action: ToggleAction,
        user: String,
        team: String,
        keyword: String,
        row_key: String,
    },
    /// A team's trend flag was toggled. `flag_info` is `None` when the flag
    /// was removed. Clients filter by their own team.
    TrendsFlagUpdate {
        keyword: String,
        action: FlagAction,
        flag_info: Option<FlagInfo>,
        team: String,
        triggered_by: String,
    },
    /// The set of online usernames changed.
    OnlineUsersUpdate { online_users: Vec<String> },
    /// A fresh set of source rows was fetched on request.
    KeywordsUpdate { keywords: Vec<SourceRow> },
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`BoardEvent`].
pub struct EventBus {
    sender: broadcast::Sender<BoardEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: BoardEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
