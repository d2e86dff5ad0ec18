use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;

use trendboard_events::BoardEvent;

use crate::state::AppState;
use crate::ws::manager::WsSender;

/// Inbound messages from board clients.
///
/// Tagged by a `type` field so unknown message types fail to deserialize
/// and are logged rather than acted on.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage {
    SelectKeyword {
        username: String,
        team: String,
        keyword: String,
        #[serde(default)]
        row_key: Option<String>,
    },
    ToggleTrendsFlag {
        username: String,
        keyword: String,
        team: String,
    },
    UserOnline {
        username: String,
    },
    UserOffline {
        username: String,
    },
    RefreshKeywords {},
}

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection is registered with `WsManager` and
/// managed by two spawned tasks (sender + receiver).
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single WebSocket connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager`.
///   2. Spawns a sender task that forwards messages from the manager channel.
///   3. Dispatches inbound board messages on the current task.
///   4. Cleans up on disconnect.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    // The connection owns the channel; the manager holds a sender clone for
    // broadcasts and the dispatcher keeps one for direct replies.
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    state.ws_manager.add(conn_id.clone(), tx.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: dispatch inbound messages.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(msg) => dispatch(&state, &conn_id, &tx, msg).await,
                Err(e) => {
                    tracing::debug!(conn_id = %conn_id, error = %e, "Unparseable client message");
                }
            },
            Ok(_msg) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Clean up the connection only. Presence is intentionally left alone:
    // users stay on the roster until they announce themselves offline.
    let username = state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(
        conn_id = %conn_id,
        username = username.as_deref().unwrap_or("anonymous"),
        "WebSocket disconnected"
    );
}

/// Handle one parsed client message.
///
/// Successful operations publish a [`BoardEvent`] for every client; a
/// rejected selection is reported only to the connection that sent it.
async fn dispatch(state: &AppState, conn_id: &str, tx: &WsSender, msg: ClientMessage) {
    match msg {
        ClientMessage::SelectKeyword {
            username,
            team,
            keyword,
            row_key,
        } => match state
            .selections
            .toggle(&username, &team, &keyword, row_key.as_deref())
            .await
        {
            Ok(outcome) => {
                state.event_bus.publish(BoardEvent::SelectionUpdate {
                    selections: outcome.selections,
                    action: outcome.action,
                    user: username,
                    team,
                    keyword,
                    row_key: outcome.row_key,
                });
            }
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "Selection rejected");
                let reply = json!({ "type": "error", "message": e.to_string() });
                let _ = tx.send(Message::Text(reply.to_string().into()));
            }
        },
        ClientMessage::ToggleTrendsFlag {
            username,
            keyword,
            team,
        } => match state.flags.toggle(&keyword, &username, &team).await {
            Ok(outcome) => {
                state.event_bus.publish(BoardEvent::TrendsFlagUpdate {
                    keyword,
                    action: outcome.action,
                    flag_info: outcome.flag_info,
                    team: outcome.team,
                    triggered_by: username,
                });
            }
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "Flag toggle rejected");
                let reply = json!({ "type": "error", "message": e.to_string() });
                let _ = tx.send(Message::Text(reply.to_string().into()));
            }
        },
        ClientMessage::UserOnline { username } => {
            state.ws_manager.set_username(conn_id, &username).await;
            let online_users = state.presence.set_online(&username).await;
            tracing::debug!(conn_id = %conn_id, user = %username, "User online");
            state
                .event_bus
                .publish(BoardEvent::OnlineUsersUpdate { online_users });
        }
        ClientMessage::UserOffline { username } => {
            let online_users = state.presence.set_offline(&username).await;
            tracing::debug!(conn_id = %conn_id, user = %username, "User offline");
            state
                .event_bus
                .publish(BoardEvent::OnlineUsersUpdate { online_users });
        }
        ClientMessage::RefreshKeywords {} => {
            let keywords = state.sheets.fetch_rows().await;
            state
                .event_bus
                .publish(BoardEvent::KeywordsUpdate { keywords });
        }
    }
}
