//! Dedup store integration harness.
//!
//! # What this covers
//!
//! - **Insert-once**: `record_seen` returns `Inserted` exactly once per
//!   identity; every later call returns `AlreadyPresent` and leaves the
//!   original record untouched.
//! - **Concurrent single winner**: N concurrent `check_and_record` calls
//!   with one identity yield exactly one `true`, for both the SQLite and
//!   the in-memory store.
//! - **Durability**: a SQLite store reopened from the same file still knows
//!   every recorded identity.
//! - **Pure lookup**: `has_seen` has no side effect.
//!
//! # What this does NOT cover
//!
//! - Retention/cleanup of old records (external, out of scope)
//! - Cross-process concurrency (exercised indirectly via the ON CONFLICT
//!   uniqueness constraint)
//!
//! # Running
//!
//! ```sh
//! cargo test --test store_harness
//! ```

use std::sync::Arc;

use chrono::Utc;
use jobwatch_core::{DedupStore, MemoryStore, RecordOutcome, SqliteStore};
use pretty_assertions::assert_eq;

fn db_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("jobwatch-test.db")
}

// ---------------------------------------------------------------------------
// Insert-once
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlite_first_insert_wins_and_record_is_immutable() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(db_path(&dir)).await.unwrap();
    let t0 = Utc::now();

    let first = store
        .record_seen("acme|id|1", "Acme", "Engineer", "https://a.example/1", t0)
        .await
        .unwrap();
    let second = store
        .record_seen("acme|id|1", "Acme", "Renamed", "https://a.example/elsewhere", Utc::now())
        .await
        .unwrap();

    assert_eq!(first, RecordOutcome::Inserted);
    assert_eq!(second, RecordOutcome::AlreadyPresent);
    assert_eq!(store.count().await.unwrap(), 1);

    let record = store.get("acme|id|1").await.unwrap().unwrap();
    assert_eq!(record.title, "Engineer");
    assert_eq!(record.url, "https://a.example/1");
    // Text round-trip through SQLite may truncate sub-millisecond precision.
    assert_eq!(record.first_seen_at.timestamp_millis(), t0.timestamp_millis());
}

#[tokio::test]
async fn has_seen_is_a_pure_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(db_path(&dir)).await.unwrap();

    assert!(!store.has_seen("acme|id|9").await.unwrap());
    assert!(!store.has_seen("acme|id|9").await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);

    store
        .record_seen("acme|id|9", "Acme", "Engineer", "https://a.example/9", Utc::now())
        .await
        .unwrap();
    assert!(store.has_seen("acme|id|9").await.unwrap());
}

// ---------------------------------------------------------------------------
// Concurrent single winner
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_check_and_record_has_exactly_one_winner_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteStore::open(db_path(&dir)).await.unwrap());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .check_and_record("acme|id|42", "Acme", "Engineer", "https://a.example/42", Utc::now())
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut winners = 0;
    for task in tasks {
        if task.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn concurrent_check_and_record_has_exactly_one_winner_memory() {
    let store = Arc::new(MemoryStore::new());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .check_and_record("acme|id|42", "Acme", "Engineer", "https://a.example/42", Utc::now())
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut winners = 0;
    for task in tasks {
        if task.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// Durability
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir);

    let store = SqliteStore::open(&path).await.unwrap();
    store
        .record_seen("acme|id|7", "Acme", "Engineer", "https://a.example/7", Utc::now())
        .await
        .unwrap();
    store.close().await;

    let reopened = SqliteStore::open(&path).await.unwrap();
    assert!(reopened.has_seen("acme|id|7").await.unwrap());
    let outcome = reopened
        .record_seen("acme|id|7", "Acme", "Engineer", "https://a.example/7", Utc::now())
        .await
        .unwrap();
    assert_eq!(outcome, RecordOutcome::AlreadyPresent);
}
