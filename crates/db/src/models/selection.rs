//! Selection entity model and the snapshot entry shape.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trendboard_core::types::{DbId, Timestamp};

/// Full selection row from the `keyword_selections` table.
#[derive(Debug, Clone, FromRow)]
pub struct Selection {
    pub id: DbId,
    pub username: String,
    pub team: String,
    pub keyword: String,
    pub row_key: String,
    pub selected_at: Timestamp,
}

/// One entry of the selection snapshot broadcast to clients and held in the
/// cache. Field names (`user`, `timestamp`) are part of the wire protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SelectionEntry {
    #[sqlx(rename = "username")]
    pub user: String,
    pub team: String,
    pub keyword: String,
    pub row_key: String,
    #[sqlx(rename = "selected_at")]
    pub timestamp: Timestamp,
}
