//! Match Pipeline — normalize → match → dedup-check → emit-or-drop, for a
//! batch of listings from one source.
//!
//! Survivors preserve input order. A store failure aborts the rest of the
//! batch and propagates (fail-fast): partial notification gaps are
//! preferable to partially-corrupted dedup state, and the scheduler retries
//! the whole cycle. Matcher and normalizer can never abort a batch.

use chrono::Utc;
use tracing::debug;

use crate::error::EngineError;
use crate::matcher;
use crate::normalizer;
use crate::policy::KeywordPolicy;
use crate::store::DedupStore;
use crate::types::{NormalizedListing, RawListing};

/// Process one source's batch. Returns the accepted, newly-seen listings to
/// hand to notification dispatch, in input order.
///
/// A raw listing with an empty company inherits `source_company` so its
/// identity is still scoped to the source it came from.
pub async fn run_batch<S>(
    store: &S,
    policy: &KeywordPolicy,
    source_company: &str,
    raws: Vec<RawListing>,
) -> Result<Vec<NormalizedListing>, EngineError>
where
    S: DedupStore + ?Sized,
{
    let mut accepted = Vec::new();

    for mut raw in raws {
        if raw.company.trim().is_empty() {
            raw.company = source_company.to_string();
        }
        let listing = normalizer::normalize(&raw);

        if !matcher::matches(&listing, policy) {
            debug!(
                company = %listing.source_company,
                title = %listing.title,
                "listing did not match policy"
            );
            continue;
        }

        let is_new = store
            .check_and_record(
                &listing.identity,
                &listing.source_company,
                &listing.title,
                &listing.url,
                Utc::now(),
            )
            .await?;
        if !is_new {
            debug!(identity = %listing.identity, "listing already seen");
            continue;
        }

        accepted.push(listing);
    }

    Ok(accepted)
}
