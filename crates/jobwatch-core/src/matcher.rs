//! Keyword Matcher — evaluates a normalized listing against a policy.
//!
//! Evaluation order, short-circuiting: exclude phrases first (an exclude hit
//! rejects outright, regardless of include phrases), then the location gate,
//! then include phrases. The same mode semantics apply to title and location
//! matching. Matching never fails; malformed text degrades to "no match".

use crate::normalizer::tokenize;
use crate::policy::{KeywordPolicy, MatchMode};
use crate::similarity::token_set_ratio;
use crate::types::NormalizedListing;

/// Does this listing satisfy the policy?
pub fn matches(listing: &NormalizedListing, policy: &KeywordPolicy) -> bool {
    let title_text = listing.title.to_lowercase();

    if policy
        .exclude
        .iter()
        .any(|p| phrase_matches(policy.mode, p, &title_text, &listing.title_tokens))
    {
        return false;
    }

    if !policy.locations.is_empty() {
        let location_tokens = tokenize(&listing.location_text);
        let location_ok = policy
            .locations
            .iter()
            .any(|p| phrase_matches(policy.mode, p, &listing.location_text, &location_tokens));
        if !location_ok {
            return false;
        }
    }

    policy
        .include
        .iter()
        .any(|p| phrase_matches(policy.mode, p, &title_text, &listing.title_tokens))
}

/// Single-phrase evaluation shared by all three phrase sets.
///
/// An empty target never matches a non-empty phrase in any mode; blank
/// phrases never match anything.
fn phrase_matches(mode: MatchMode, phrase: &str, target_text: &str, target_tokens: &[String]) -> bool {
    if target_text.is_empty() || phrase.trim().is_empty() {
        return false;
    }
    match mode {
        MatchMode::Exact => target_text.contains(&phrase.to_lowercase()),
        MatchMode::Tokenized => {
            let phrase_tokens = tokenize(phrase);
            !phrase_tokens.is_empty()
                && phrase_tokens
                    .iter()
                    .all(|pt| target_tokens.iter().any(|tt| tt == pt))
        }
        MatchMode::Fuzzy { threshold } => token_set_ratio(phrase, target_text) >= threshold,
    }
}
