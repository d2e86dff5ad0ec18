use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};
use trendboard_core::types::Timestamp;

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket connection.
pub struct WsConnection {
    /// Username announced by the client, once it has sent its first
    /// identifying message. Anonymous until then.
    pub username: Option<String>,
    /// Channel sender for outbound messages to this connection.
    pub sender: WsSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Manages all active WebSocket connections.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    /// Create a new, empty connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    ///
    /// The caller owns the channel and keeps a sender clone for direct
    /// replies; the manager only needs the sender half for broadcasts.
    pub async fn add(&self, conn_id: String, sender: WsSender) {
        let conn = WsConnection {
            username: None,
            sender,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
    }

    /// Remove a connection by its ID.
    ///
    /// Returns the username the connection had announced, if any, so the
    /// caller can attribute the disconnect.
    pub async fn remove(&self, conn_id: &str) -> Option<String> {
        let conn = self.connections.write().await.remove(conn_id)?;
        let age_secs = (chrono::Utc::now() - conn.connected_at).num_seconds();
        tracing::debug!(conn_id, age_secs, "WebSocket connection removed");
        conn.username
    }

    /// Attach a username to an existing connection.
    pub async fn set_username(&self, conn_id: &str, username: &str) {
        if let Some(conn) = self.connections.write().await.get_mut(conn_id) {
            conn.username = Some(username.to_string());
        }
    }

    /// Broadcast a message to all connected clients.
    ///
    /// Connections whose send channels are closed are silently skipped
    /// (they will be cleaned up on their next receive loop iteration).
    pub async fn broadcast(&self, message: Message) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(message.clone());
        }
    }

    /// Return the current number of active connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the map.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops accepting new connections.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connected client.
    ///
    /// Used by the heartbeat task to keep connections alive and detect
    /// stale ones.
    pub async fn ping_all(&self) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
