//! Test doubles for the dedup store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobwatch_core::{DedupStore, EngineError, MemoryStore, RecordOutcome, SeenRecord};

/// A store that starts failing after a fixed number of successful
/// `record_seen` calls. Used to exercise the pipeline's fail-fast path.
pub struct FailingStore {
    inner: MemoryStore,
    remaining: AtomicUsize,
}

impl FailingStore {
    /// Succeed `successes` times, then fail every call.
    pub fn after(successes: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            remaining: AtomicUsize::new(successes),
        }
    }

    pub fn recorded(&self) -> usize {
        self.inner.len()
    }

    pub fn get(&self, identity: &str) -> Option<SeenRecord> {
        self.inner.get(identity)
    }

    fn take_budget(&self) -> Result<(), EngineError> {
        let prev = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .ok();
        match prev {
            Some(_) => Ok(()),
            None => Err(EngineError::StoreUnavailable(sqlx::Error::PoolClosed)),
        }
    }
}

#[async_trait]
impl DedupStore for FailingStore {
    async fn has_seen(&self, identity: &str) -> Result<bool, EngineError> {
        self.inner.has_seen(identity).await
    }

    async fn record_seen(
        &self,
        identity: &str,
        company: &str,
        title: &str,
        url: &str,
        first_seen_at: DateTime<Utc>,
    ) -> Result<RecordOutcome, EngineError> {
        self.take_budget()?;
        self.inner
            .record_seen(identity, company, title, url, first_seen_at)
            .await
    }
}
