//! Test builders — ergonomic constructors for raw listings and policies.
//!
//! Designed for readability in test assertions, not for production use.

use jobwatch_core::{KeywordPolicy, MatchMode, RawListing};

// ---------------------------------------------------------------------------
// RawListingBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawListing`] test fixtures.
///
/// ```rust
/// let listing = RawListingBuilder::new("Data Scientist II")
///     .company("Acme")
///     .location("Remote, US")
///     .url("https://acme.example/jobs/17")
///     .build();
/// ```
pub struct RawListingBuilder {
    company: String,
    title: String,
    location: String,
    url: String,
    posting_id: Option<String>,
}

impl RawListingBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            company: "Acme".to_string(),
            title: title.into(),
            location: String::new(),
            url: String::new(),
            posting_id: None,
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn posting_id(mut self, id: impl Into<String>) -> Self {
        self.posting_id = Some(id.into());
        self
    }

    pub fn build(self) -> RawListing {
        RawListing {
            company: self.company,
            title: self.title,
            location: self.location,
            url: self.url,
            posting_id: self.posting_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Policy helpers
// ---------------------------------------------------------------------------

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a validated policy; panics on invalid input.
pub fn policy(include: &[&str], exclude: &[&str], locations: &[&str], mode: MatchMode) -> KeywordPolicy {
    KeywordPolicy::new(phrases(include), phrases(exclude), phrases(locations), mode)
        .expect("test policy must be valid")
}

/// Tokenized policy with only include phrases.
pub fn include_only(include: &[&str]) -> KeywordPolicy {
    policy(include, &[], &[], MatchMode::Tokenized)
}

/// The remote-data-scientist policy used by the end-to-end scenarios:
/// tokenized, include "Data Scientist", exclude "Intern", location "Remote".
pub fn remote_data_scientist_policy() -> KeywordPolicy {
    policy(&["Data Scientist"], &["Intern"], &["Remote"], MatchMode::Tokenized)
}
