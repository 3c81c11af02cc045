//! jobwatch-core — matching-and-deduplication engine for jobwatch.
//!
//! This crate decides, for each newly scraped job listing, whether it is
//! relevant (keyword matcher) and whether it has already been reported
//! (dedup store). Scraper adapters, notification channels, and the
//! scheduling loop live in the `jobwatch` binary crate and only ever talk
//! to this crate through [`pipeline::run_batch`].
//!
//! # Architecture
//!
//! ```text
//! scraper ──► Normalizer ──► Matcher ──► Dedup Store ──► notify dispatch
//!                (pure)      (drops      (drops
//!                            non-match)  already-seen)
//! ```
//!
//! The dedup store is the only stateful component; the normalizer and
//! matcher are pure functions over immutable inputs.

pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod pipeline;
pub mod policy;
pub mod similarity;
pub mod store;
pub mod types;

pub use error::EngineError;
pub use policy::{KeywordPolicy, MatchMode};
pub use store::{DedupStore, MemoryStore, RecordOutcome, SqliteStore};
pub use types::{NormalizedListing, RawListing, SeenRecord};
