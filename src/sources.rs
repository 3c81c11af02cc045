//! Scraper adapters — producers of raw listings, one per career-board kind.
//!
//! Adapters are polymorphic over a single capability: produce zero or more
//! raw listings for a source. Both built-in adapters speak pure JSON board
//! APIs (Greenhouse, Lever); no HTML is parsed. A failed fetch is reported
//! to the scheduler, which skips that source for the cycle.

use anyhow::{Context, Result};
use async_trait::async_trait;
use jobwatch_core::RawListing;
use serde::Deserialize;

use crate::config::{CompanyConfig, ScraperKind};

/// One career-page source.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Company this source scrapes for.
    fn company(&self) -> &str;

    /// Fetch the current listings. May fail; the pipeline is simply not
    /// invoked for this source this cycle.
    async fn fetch(&self) -> Result<Vec<RawListing>>;
}

/// Shared HTTP client for all adapters.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("jobwatch/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")
}

/// Instantiate an adapter per configured company.
pub fn build_sources(companies: &[CompanyConfig], client: &reqwest::Client) -> Vec<Box<dyn ListingSource>> {
    companies
        .iter()
        .map(|company| -> Box<dyn ListingSource> {
            match company.scraper {
                ScraperKind::Greenhouse => Box::new(GreenhouseSource::new(
                    company.name.clone(),
                    company.board.clone(),
                    client.clone(),
                )),
                ScraperKind::Lever => Box::new(LeverSource::new(
                    company.name.clone(),
                    company.board.clone(),
                    client.clone(),
                )),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Greenhouse
// ---------------------------------------------------------------------------

/// Greenhouse job-board API adapter
/// (`https://boards-api.greenhouse.io/v1/boards/{board}/jobs`).
pub struct GreenhouseSource {
    company: String,
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GreenhouseJobs {
    jobs: Vec<GreenhouseJob>,
}

#[derive(Debug, Deserialize)]
struct GreenhouseJob {
    id: i64,
    title: String,
    absolute_url: String,
    #[serde(default)]
    location: Option<GreenhouseLocation>,
}

#[derive(Debug, Deserialize)]
struct GreenhouseLocation {
    name: String,
}

impl GreenhouseSource {
    pub fn new(company: String, board: String, client: reqwest::Client) -> Self {
        let url = format!("https://boards-api.greenhouse.io/v1/boards/{board}/jobs");
        Self { company, url, client }
    }
}

#[async_trait]
impl ListingSource for GreenhouseSource {
    fn company(&self) -> &str {
        &self.company
    }

    async fn fetch(&self) -> Result<Vec<RawListing>> {
        let body: GreenhouseJobs = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("greenhouse request failed for {}", self.company))?
            .error_for_status()
            .with_context(|| format!("greenhouse returned an error status for {}", self.company))?
            .json()
            .await
            .with_context(|| format!("greenhouse payload did not parse for {}", self.company))?;

        Ok(body
            .jobs
            .into_iter()
            .map(|job| RawListing {
                company: self.company.clone(),
                title: job.title,
                location: job.location.map(|l| l.name).unwrap_or_default(),
                url: job.absolute_url,
                posting_id: Some(job.id.to_string()),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Lever
// ---------------------------------------------------------------------------

/// Lever postings API adapter
/// (`https://api.lever.co/v0/postings/{org}?mode=json`).
pub struct LeverSource {
    company: String,
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct LeverPosting {
    id: String,
    text: String,
    #[serde(rename = "hostedUrl")]
    hosted_url: String,
    #[serde(default)]
    categories: LeverCategories,
}

#[derive(Debug, Default, Deserialize)]
struct LeverCategories {
    #[serde(default)]
    location: Option<String>,
}

impl LeverSource {
    pub fn new(company: String, org: String, client: reqwest::Client) -> Self {
        let url = format!("https://api.lever.co/v0/postings/{org}?mode=json");
        Self { company, url, client }
    }
}

#[async_trait]
impl ListingSource for LeverSource {
    fn company(&self) -> &str {
        &self.company
    }

    async fn fetch(&self) -> Result<Vec<RawListing>> {
        let postings: Vec<LeverPosting> = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("lever request failed for {}", self.company))?
            .error_for_status()
            .with_context(|| format!("lever returned an error status for {}", self.company))?
            .json()
            .await
            .with_context(|| format!("lever payload did not parse for {}", self.company))?;

        Ok(postings
            .into_iter()
            .map(|posting| RawListing {
                company: self.company.clone(),
                title: posting.text,
                location: posting.categories.location.unwrap_or_default(),
                url: posting.hosted_url,
                posting_id: Some(posting.id),
            })
            .collect())
    }
}
