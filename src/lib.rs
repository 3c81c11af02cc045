//! jobwatch — career-page job alerts.
//!
//! Periodically scrapes job listings from configured career-page sources,
//! filters them against a keyword policy, suppresses already-seen listings,
//! and dispatches notifications for new matches. The matching and
//! deduplication engine lives in `jobwatch-core`; this crate provides the
//! outer shell around it.
//!
//! # Architecture
//!
//! ```text
//! Scheduler ──► Sources ──► jobwatch-core pipeline ──► Notifier
//!                (fetch)    (normalize → match →        (dispatch)
//!                            dedup-check)
//! ```
//!
//! One cycle per polling interval; within a cycle all configured sources run
//! concurrently. The dedup store (SQLite) is the only shared state.

pub mod config;
pub mod notify;
pub mod scheduler;
pub mod sources;
