//! Core types for jobwatch-core.
//!
//! This module defines the data structures shared across the engine: the
//! [`RawListing`] produced by scraper adapters, the [`NormalizedListing`]
//! derived from it, and the [`SeenRecord`] persisted by the dedup store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job listing exactly as a scraper adapter produced it.
///
/// Carries no invariants: any field may be empty and `posting_id` is only
/// present when the source site exposes a stable posting identifier. The
/// serde defaults let adapters deserialize incomplete API payloads without
/// special-casing missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    /// Company the listing belongs to. Filled in from the source company by
    /// the pipeline when a scraper leaves it empty.
    #[serde(default)]
    pub company: String,
    /// Job title, free text.
    #[serde(default)]
    pub title: String,
    /// Location, free text ("Remote, US", "New York", ...).
    #[serde(default)]
    pub location: String,
    /// Canonical URL of the posting.
    #[serde(default)]
    pub url: String,
    /// Source-site posting identifier, when one exists. Preferred over the
    /// URL for identity derivation because it survives URL reshuffles.
    #[serde(default)]
    pub posting_id: Option<String>,
}

/// Canonical, immutable form of a listing as used by the matcher and the
/// dedup store.
///
/// Produced by [`normalizer::normalize`](crate::normalizer::normalize).
/// `identity` is deterministic: re-normalizing an identical raw listing
/// always yields the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedListing {
    /// Stable deduplication key.
    pub identity: String,
    /// Original title, trimmed. Kept for notification display and for the
    /// persisted [`SeenRecord`].
    pub title: String,
    /// Lower-cased alphanumeric tokens of the title, in order.
    pub title_tokens: Vec<String>,
    /// Lower-cased location text.
    pub location_text: String,
    /// Company the listing was scraped for.
    pub source_company: String,
    /// Canonical URL of the posting.
    pub url: String,
}

/// A previously-notified listing as persisted by the dedup store.
///
/// Created exactly once, on first acceptance by the pipeline; never mutated
/// and never deleted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SeenRecord {
    /// Primary key; unique across the store.
    pub identity: String,
    /// When the pipeline first accepted the listing (UTC).
    pub first_seen_at: DateTime<Utc>,
    pub company: String,
    pub title: String,
    pub url: String,
}
