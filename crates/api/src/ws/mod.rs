//! WebSocket infrastructure for real-time collaboration.
//!
//! Provides connection management, presence tracking, the board event
//! broadcaster, heartbeat monitoring, and the HTTP upgrade handler used
//! by Axum routes.

mod broadcaster;
mod handler;
mod heartbeat;
pub mod manager;
pub mod presence;

pub use broadcaster::Broadcaster;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
pub use presence::PresenceRegistry;
