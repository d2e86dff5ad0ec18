//! Unit tests for `WsManager`.
//!
//! These tests exercise the WebSocket connection manager directly, without
//! performing any HTTP upgrades. They verify add/remove semantics, broadcast
//! delivery, and graceful shutdown behaviour.

use axum::extract::ws::Message;
use tokio::sync::mpsc;
use trendboard_api::ws::WsManager;

fn channel() -> (
    mpsc::UnboundedSender<Message>,
    mpsc::UnboundedReceiver<Message>,
) {
    mpsc::unbounded_channel()
}

// ---------------------------------------------------------------------------
// Test: new manager starts with zero connections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_manager_has_zero_connections() {
    let manager = WsManager::new();

    assert_eq!(manager.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: add() increments the connection count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_increments_connection_count() {
    let manager = WsManager::new();

    let (tx, _rx) = channel();
    manager.add("conn-1".to_string(), tx).await;

    assert_eq!(manager.connection_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: remove() decrements the connection count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_decrements_connection_count() {
    let manager = WsManager::new();

    let (tx, _rx) = channel();
    manager.add("conn-1".to_string(), tx).await;
    assert_eq!(manager.connection_count().await, 1);

    manager.remove("conn-1").await;
    assert_eq!(manager.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: remove() with unknown ID is a no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_unknown_id_is_noop() {
    let manager = WsManager::new();

    let (tx, _rx) = channel();
    manager.add("conn-1".to_string(), tx).await;
    manager.remove("nonexistent").await;

    assert_eq!(manager.connection_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: broadcast() reaches every registered connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn broadcast_reaches_all_connections() {
    let manager = WsManager::new();

    let (tx1, mut rx1) = channel();
    let (tx2, mut rx2) = channel();
    manager.add("conn-1".to_string(), tx1).await;
    manager.add("conn-2".to_string(), tx2).await;

    manager
        .broadcast(Message::Text("hello".to_string().into()))
        .await;

    assert!(matches!(rx1.recv().await, Some(Message::Text(t)) if t == "hello"));
    assert!(matches!(rx2.recv().await, Some(Message::Text(t)) if t == "hello"));
}

// ---------------------------------------------------------------------------
// Test: broadcast() skips connections with a dropped receiver
// ---------------------------------------------------------------------------

#[tokio::test]
async fn broadcast_skips_closed_channels() {
    let manager = WsManager::new();

    let (tx1, mut rx1) = channel();
    let (tx2, rx2) = channel();
    manager.add("conn-1".to_string(), tx1).await;
    manager.add("conn-2".to_string(), tx2).await;
    drop(rx2);

    // Must not panic or error; the live connection still gets the message.
    manager
        .broadcast(Message::Text("still here".to_string().into()))
        .await;

    assert!(matches!(rx1.recv().await, Some(Message::Text(t)) if t == "still here"));
}

// ---------------------------------------------------------------------------
// Test: remove() hands back the username announced via set_username()
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_returns_announced_username() {
    let manager = WsManager::new();

    let (tx, _rx) = channel();
    manager.add("conn-1".to_string(), tx).await;

    // Anonymous until the client announces itself.
    manager.set_username("conn-1", "alice").await;

    assert_eq!(manager.remove("conn-1").await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn remove_of_anonymous_connection_returns_no_username() {
    let manager = WsManager::new();

    let (tx, _rx) = channel();
    manager.add("conn-1".to_string(), tx).await;

    assert_eq!(manager.remove("conn-1").await, None);
}

// ---------------------------------------------------------------------------
// Test: set_username() attaches a name without touching other connections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_username_on_unknown_connection_is_noop() {
    let manager = WsManager::new();

    let (tx, _rx) = channel();
    manager.add("conn-1".to_string(), tx).await;
    manager.set_username("nonexistent", "alice").await;

    assert_eq!(manager.connection_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: ping_all() delivers a Ping frame to every connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_all_sends_ping_frames() {
    let manager = WsManager::new();

    let (tx, mut rx) = channel();
    manager.add("conn-1".to_string(), tx).await;

    manager.ping_all().await;

    assert!(matches!(rx.recv().await, Some(Message::Ping(_))));
}

// ---------------------------------------------------------------------------
// Test: shutdown_all() closes every connection and empties the map
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let manager = WsManager::new();

    let (tx1, mut rx1) = channel();
    let (tx2, mut rx2) = channel();
    manager.add("conn-1".to_string(), tx1).await;
    manager.add("conn-2".to_string(), tx2).await;

    manager.shutdown_all().await;

    assert_eq!(manager.connection_count().await, 0);
    assert!(matches!(rx1.recv().await, Some(Message::Close(None))));
    assert!(matches!(rx2.recv().await, Some(Message::Close(None))));
}
