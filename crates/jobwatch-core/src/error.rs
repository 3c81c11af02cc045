//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the matching-and-deduplication engine.
///
/// Normalization and matching never fail: malformed or missing text degrades
/// to "no match". The two failure modes that do surface are a policy rejected
/// at load time and a dedup store that cannot be read or written. Store
/// failures fail the whole batch (fail-closed: on doubt, do not notify).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The keyword policy is malformed (empty include set, fuzzy threshold
    /// outside `(0, 1]`). Detected by [`KeywordPolicy::validate`]
    /// before the engine runs.
    ///
    /// [`KeywordPolicy::validate`]: crate::policy::KeywordPolicy::validate
    #[error("invalid keyword policy: {0}")]
    InvalidPolicy(String),

    /// The dedup store could not be read or written. The current batch is
    /// aborted and the error propagated to the caller for logging and retry.
    #[error("dedup store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}
