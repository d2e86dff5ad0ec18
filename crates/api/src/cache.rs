//! In-process selection snapshot cache.
//!
//! Mirrors the full `keyword_selections` table: empty and "not loaded" at
//! startup, populated on first read, replaced wholesale after every mutation
//! or explicit refresh. Readers therefore always see a complete pre- or
//! post-mutation snapshot, never a partially updated one.

use tokio::sync::RwLock;
use trendboard_db::models::selection::SelectionEntry;
use trendboard_db::repositories::SelectionRepo;
use trendboard_db::DbPool;

/// Shared snapshot cache. Designed to be wrapped in `Arc` and injected via
/// `AppState` rather than living as a process global.
pub struct SelectionCache {
    inner: RwLock<Option<Vec<SelectionEntry>>>,
}

impl SelectionCache {
    /// Create an empty, not-yet-loaded cache.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Current snapshot, loading it from the store on first read.
    pub async fn get_or_load(&self, pool: &DbPool) -> Result<Vec<SelectionEntry>, sqlx::Error> {
        if let Some(snapshot) = self.inner.read().await.as_ref() {
            return Ok(snapshot.clone());
        }
        let snapshot = SelectionRepo::list_all(pool).await?;
        *self.inner.write().await = Some(snapshot.clone());
        tracing::info!(count = snapshot.len(), "Selection cache loaded");
        Ok(snapshot)
    }

    /// Replace the cached snapshot wholesale.
    pub async fn replace(&self, snapshot: Vec<SelectionEntry>) {
        *self.inner.write().await = Some(snapshot);
    }

    /// The last known-good snapshot, if one was ever loaded.
    ///
    /// Used on the store-failure path so a failed toggle returns the previous
    /// consistent view instead of an empty one.
    pub async fn last_known(&self) -> Option<Vec<SelectionEntry>> {
        self.inner.read().await.clone()
    }

    /// Force a reload from the store, returning the new entry count.
    pub async fn refresh(&self, pool: &DbPool) -> Result<usize, sqlx::Error> {
        let snapshot = SelectionRepo::list_all(pool).await?;
        let count = snapshot.len();
        self.replace(snapshot).await;
        tracing::info!(count, "Selection cache refreshed");
        Ok(count)
    }
}

impl Default for SelectionCache {
    fn default() -> Self {
        Self::new()
    }
}
