//! Dedup Store — durable record of previously-notified listing identities.
//!
//! The store is the single source of truth for "already notified" and the
//! only shared mutable resource in the engine. [`DedupStore::record_seen`]
//! is atomic with respect to the uniqueness of `identity`: concurrent or
//! repeated calls with the same identity yield exactly one
//! [`RecordOutcome::Inserted`]. The SQLite implementation enforces this with
//! a primary-key constraint and a single `INSERT ... ON CONFLICT DO NOTHING`
//! statement rather than read-then-write.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::EngineError;
use crate::types::SeenRecord;

/// Result of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// This caller created the record; it owns the notification.
    Inserted,
    /// Another caller (or an earlier cycle) got there first.
    AlreadyPresent,
}

/// Persistence seam for the dedup set.
#[async_trait]
pub trait DedupStore: Send + Sync {
    /// Pure lookup, no side effect.
    async fn has_seen(&self, identity: &str) -> Result<bool, EngineError>;

    /// Attempt to insert a new [`SeenRecord`]. Atomic on identity
    /// uniqueness: exactly one concurrent caller gets `Inserted`.
    async fn record_seen(
        &self,
        identity: &str,
        company: &str,
        title: &str,
        url: &str,
        first_seen_at: DateTime<Utc>,
    ) -> Result<RecordOutcome, EngineError>;

    /// Returns `true` only for the caller that wins the race for this
    /// identity. This is what prevents duplicate notifications when a
    /// scrape cycle is re-run or two cycles overlap.
    async fn check_and_record(
        &self,
        identity: &str,
        company: &str,
        title: &str,
        url: &str,
        first_seen_at: DateTime<Utc>,
    ) -> Result<bool, EngineError> {
        let outcome = self
            .record_seen(identity, company, title, url, first_seen_at)
            .await?;
        Ok(outcome == RecordOutcome::Inserted)
    }
}

// ---------------------------------------------------------------------------
// SQLite store
// ---------------------------------------------------------------------------

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS seen_listings (
    identity      TEXT PRIMARY KEY,
    first_seen_at TEXT NOT NULL,
    company       TEXT NOT NULL,
    title         TEXT NOT NULL,
    url           TEXT NOT NULL
)";

/// Durable dedup store backed by a SQLite file.
///
/// Survives process restarts; safe for concurrent pipelines within one
/// process and for repeated runs against the same file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the store at `path` and ensure the schema.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Close the underlying pool, flushing outstanding writes.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Number of persisted records.
    pub async fn count(&self) -> Result<i64, EngineError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seen_listings")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// Fetch a persisted record by identity.
    pub async fn get(&self, identity: &str) -> Result<Option<SeenRecord>, EngineError> {
        let record = sqlx::query_as::<_, SeenRecord>(
            "SELECT identity, first_seen_at, company, title, url
             FROM seen_listings WHERE identity = ?",
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}

#[async_trait]
impl DedupStore for SqliteStore {
    async fn has_seen(&self, identity: &str) -> Result<bool, EngineError> {
        let hit: Option<i64> = sqlx::query_scalar("SELECT 1 FROM seen_listings WHERE identity = ?")
            .bind(identity)
            .fetch_optional(&self.pool)
            .await?;
        Ok(hit.is_some())
    }

    async fn record_seen(
        &self,
        identity: &str,
        company: &str,
        title: &str,
        url: &str,
        first_seen_at: DateTime<Utc>,
    ) -> Result<RecordOutcome, EngineError> {
        // The primary key serializes racing callers; rows_affected tells us
        // whether this call won.
        let result = sqlx::query(
            "INSERT INTO seen_listings (identity, first_seen_at, company, title, url)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(identity) DO NOTHING",
        )
        .bind(identity)
        .bind(first_seen_at)
        .bind(company)
        .bind(title)
        .bind(url)
        .execute(&self.pool)
        .await?;

        Ok(if result.rows_affected() == 1 {
            RecordOutcome::Inserted
        } else {
            RecordOutcome::AlreadyPresent
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Mutex-guarded in-memory store with the same atomicity contract.
///
/// Not durable; intended for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, SeenRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Fetch a stored record by identity.
    pub fn get(&self, identity: &str) -> Option<SeenRecord> {
        self.lock().get(identity).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SeenRecord>> {
        // A poisoned lock only means a panicking test thread; the map itself
        // is still consistent because every mutation is a single insert.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DedupStore for MemoryStore {
    async fn has_seen(&self, identity: &str) -> Result<bool, EngineError> {
        Ok(self.lock().contains_key(identity))
    }

    async fn record_seen(
        &self,
        identity: &str,
        company: &str,
        title: &str,
        url: &str,
        first_seen_at: DateTime<Utc>,
    ) -> Result<RecordOutcome, EngineError> {
        let mut records = self.lock();
        if records.contains_key(identity) {
            return Ok(RecordOutcome::AlreadyPresent);
        }
        records.insert(
            identity.to_string(),
            SeenRecord {
                identity: identity.to_string(),
                first_seen_at,
                company: company.to_string(),
                title: title.to_string(),
                url: url.to_string(),
            },
        );
        Ok(RecordOutcome::Inserted)
    }
}
