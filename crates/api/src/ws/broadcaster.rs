//! Event-to-WebSocket fanout.
//!
//! [`Broadcaster`] subscribes to the board event bus and forwards each
//! event, serialized as its wire JSON form, to every connected client.

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;
use trendboard_events::BoardEvent;

use crate::ws::WsManager;

/// Forwards board events to all WebSocket connections.
pub struct Broadcaster {
    ws_manager: Arc<WsManager>,
}

impl Broadcaster {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main fanout loop.
    ///
    /// Subscribes to the event bus via `receiver` and forwards each event.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](trendboard_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<BoardEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => {
                        self.ws_manager.broadcast(Message::Text(json.into())).await;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize board event");
                    }
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Broadcaster lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, broadcaster shutting down");
                    break;
                }
            }
        }
    }
}
