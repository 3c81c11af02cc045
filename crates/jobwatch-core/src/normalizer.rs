//! Listing Normalizer — canonicalizes a raw scraped record into a stable
//! identity and comparable text fields.
//!
//! Normalization is pure and never fails; missing fields degrade to empty
//! strings. The identity key prefers the strongest signal available:
//! `(company, posting_id)`, then `(company, url)`, then
//! `(company, title, location)`, so two independently-fetched
//! representations of the same posting collapse to one identity even when
//! one scrape has richer metadata than the other.

use crate::types::{NormalizedListing, RawListing};

/// Lower-cased alphanumeric tokens, split on non-alphanumeric boundaries,
/// empties dropped, order preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Canonicalize a raw listing. Deterministic: identical input always yields
/// an identical identity.
pub fn normalize(raw: &RawListing) -> NormalizedListing {
    let company_key = raw.company.trim().to_lowercase();
    let title = raw.title.trim().to_string();
    let title_tokens = tokenize(&raw.title);
    let location_text = raw.location.trim().to_lowercase();
    let url = raw.url.trim().to_string();

    // Each tier is tagged so keys from different tiers cannot collide.
    let identity = match raw.posting_id.as_deref().map(str::trim) {
        Some(pid) if !pid.is_empty() => format!("{company_key}|id|{pid}"),
        _ if !url.is_empty() => format!("{company_key}|url|{}", url.to_lowercase()),
        _ => format!(
            "{company_key}|text|{}|{location_text}",
            title_tokens.join(" ")
        ),
    };

    NormalizedListing {
        identity,
        title,
        title_tokens,
        location_text,
        source_company: raw.company.trim().to_string(),
        url,
    }
}
