//! Database-level tests for the selection toggle engine.
//!
//! Each test runs against a fresh migrated database via `#[sqlx::test]`,
//! exercising toggle semantics, row-key handling, cache behaviour, and the
//! store-failure path.

use std::sync::Arc;

use sqlx::PgPool;
use trendboard_api::cache::SelectionCache;
use trendboard_api::engine::SelectionEngine;
use trendboard_core::actions::ToggleAction;
use trendboard_core::error::CoreError;
use trendboard_core::row_key::ROW_KEY_SEPARATOR;

fn engine(pool: &PgPool) -> (SelectionEngine, Arc<SelectionCache>) {
    let cache = Arc::new(SelectionCache::new());
    (
        SelectionEngine::new(pool.clone(), Arc::clone(&cache)),
        cache,
    )
}

/// Toggling the same row twice ends where it started: selected, then not.
#[sqlx::test(migrations = "../../migrations")]
async fn toggle_twice_restores_initial_state(pool: PgPool) {
    let (engine, _cache) = engine(&pool);

    let first = engine
        .toggle("alice", "Alpha", "Budget 2026", Some("row-1"))
        .await
        .unwrap();
    assert_eq!(first.action, ToggleAction::Selected);
    assert_eq!(first.selections.len(), 1);

    let second = engine
        .toggle("alice", "Alpha", "Budget 2026", Some("row-1"))
        .await
        .unwrap();
    assert_eq!(second.action, ToggleAction::Deselected);
    assert!(second.selections.is_empty());
}

/// Two rows that share keyword text are independent selections.
#[sqlx::test(migrations = "../../migrations")]
async fn same_keyword_text_distinct_rows_are_independent(pool: PgPool) {
    let (engine, _cache) = engine(&pool);

    let key_a = format!("Budget 2026{ROW_KEY_SEPARATOR}05-01-2026{ROW_KEY_SEPARATOR}14:30:00{ROW_KEY_SEPARATOR}1");
    let key_b = format!("Budget 2026{ROW_KEY_SEPARATOR}06-01-2026{ROW_KEY_SEPARATOR}09:00:00{ROW_KEY_SEPARATOR}7");

    let first = engine
        .toggle("alice", "Alpha", "Budget 2026", Some(&key_a))
        .await
        .unwrap();
    assert_eq!(first.action, ToggleAction::Selected);

    let second = engine
        .toggle("alice", "Alpha", "Budget 2026", Some(&key_b))
        .await
        .unwrap();
    assert_eq!(second.action, ToggleAction::Selected);
    assert_eq!(second.selections.len(), 2);

    // Deselecting one row leaves the other untouched.
    let third = engine
        .toggle("alice", "Alpha", "Budget 2026", Some(&key_a))
        .await
        .unwrap();
    assert_eq!(third.action, ToggleAction::Deselected);
    assert_eq!(third.selections.len(), 1);
    assert_eq!(third.selections[0].row_key, key_b);
}

/// The returned snapshot reflects the toggle: the actor appears in it after
/// selecting and is gone after deselecting.
#[sqlx::test(migrations = "../../migrations")]
async fn snapshot_tracks_membership(pool: PgPool) {
    let (engine, _cache) = engine(&pool);

    engine
        .toggle("bob", "Beta", "Election", Some("row-e"))
        .await
        .unwrap();
    let selected = engine
        .toggle("alice", "Alpha", "Storm", Some("row-s"))
        .await
        .unwrap();
    assert_eq!(selected.selections.len(), 2);
    assert!(selected
        .selections
        .iter()
        .any(|s| s.user == "alice" && s.row_key == "row-s"));

    let deselected = engine
        .toggle("alice", "Alpha", "Storm", Some("row-s"))
        .await
        .unwrap();
    assert_eq!(deselected.selections.len(), 1);
    assert!(!deselected.selections.iter().any(|s| s.user == "alice"));
}

/// Blank or missing fields are rejected before any store access.
#[sqlx::test(migrations = "../../migrations")]
async fn validation_rejects_blank_fields(pool: PgPool) {
    let (engine, cache) = engine(&pool);

    let result = engine.toggle("  ", "Alpha", "Budget", None).await;
    assert!(matches!(result, Err(CoreError::Validation(_))));

    let result = engine.toggle("alice", "Alpha", "", None).await;
    assert!(matches!(result, Err(CoreError::Validation(_))));

    // Nothing was written or cached.
    assert!(cache.last_known().await.is_none());
}

/// A missing row key falls back to the keyword text.
#[sqlx::test(migrations = "../../migrations")]
async fn row_key_defaults_to_keyword(pool: PgPool) {
    let (engine, _cache) = engine(&pool);

    let outcome = engine
        .toggle("alice", "Alpha", "Old Client Keyword", None)
        .await
        .unwrap();
    assert_eq!(outcome.row_key, "Old Client Keyword");
    assert_eq!(outcome.selections[0].row_key, "Old Client Keyword");

    // A blank key behaves like a missing one.
    let outcome = engine
        .toggle("alice", "Alpha", "Old Client Keyword", Some("   "))
        .await
        .unwrap();
    assert_eq!(outcome.action, ToggleAction::Deselected);
}

/// A store failure surfaces as `ToggleAction::Error` with the last good
/// snapshot, not as an `Err`.
#[sqlx::test(migrations = "../../migrations")]
async fn store_failure_reports_error_action_with_last_snapshot(pool: PgPool) {
    let (engine, cache) = engine(&pool);

    engine
        .toggle("alice", "Alpha", "Budget", Some("row-1"))
        .await
        .unwrap();
    assert_eq!(cache.last_known().await.unwrap().len(), 1);

    pool.close().await;

    let outcome = engine
        .toggle("bob", "Beta", "Election", Some("row-2"))
        .await
        .unwrap();
    assert_eq!(outcome.action, ToggleAction::Error);
    // The failed toggle reports the previous consistent view.
    assert_eq!(outcome.selections.len(), 1);
    assert_eq!(outcome.selections[0].user, "alice");
    assert_eq!(cache.last_known().await.unwrap().len(), 1);
}
