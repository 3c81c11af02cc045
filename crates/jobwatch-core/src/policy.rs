//! Keyword policy — the include/exclude/location configuration governing
//! which listings are relevant.

use crate::error::EngineError;

/// Matching strategy applied to both title and location phrases.
///
/// A closed set of strategies, so a tagged variant dispatched by a single
/// evaluation function rather than a trait hierarchy. The fuzzy threshold
/// lives inside the `Fuzzy` variant: it cannot be set for the other modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    Exact,
    /// Every token of the phrase must appear among the target's tokens.
    /// "Software Engineer" matches "Software Engineer II" but not "Engineer".
    Tokenized,
    /// Token-set similarity against the target must reach `threshold`.
    Fuzzy { threshold: f64 },
}

/// The relevance policy evaluated against every normalized listing.
///
/// Loaded and validated by the configuration layer once per cycle; the
/// engine treats it as immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordPolicy {
    /// At least one include phrase must match the title. Must be non-empty.
    pub include: Vec<String>,
    /// Any exclude phrase matching the title rejects the listing outright.
    pub exclude: Vec<String>,
    /// When non-empty, the listing's location must match at least one phrase.
    pub locations: Vec<String>,
    /// Strategy used for all three phrase sets.
    pub mode: MatchMode,
}

impl KeywordPolicy {
    /// Build a validated policy. Convenience for tests and embedding callers;
    /// the config loader constructs the struct directly and calls
    /// [`validate`](Self::validate).
    pub fn new(
        include: Vec<String>,
        exclude: Vec<String>,
        locations: Vec<String>,
        mode: MatchMode,
    ) -> Result<Self, EngineError> {
        let policy = Self {
            include,
            exclude,
            locations,
            mode,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Reject malformed policies before the engine runs.
    ///
    /// An empty include set would accept nothing (or, worse, everything,
    /// depending on the reading) and is a configuration error. A fuzzy
    /// threshold outside `(0, 1]` can never be satisfied meaningfully.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.include.iter().all(|p| p.trim().is_empty()) {
            return Err(EngineError::InvalidPolicy(
                "include keyword set must not be empty".to_string(),
            ));
        }
        if let MatchMode::Fuzzy { threshold } = self.mode {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(EngineError::InvalidPolicy(format!(
                    "fuzzy threshold must be in (0, 1], got {threshold}"
                )));
            }
        }
        Ok(())
    }
}
