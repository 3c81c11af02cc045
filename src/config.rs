//! Application configuration.
//!
//! [`AppConfig::load`] layers built-in defaults, an optional YAML file, and
//! `JOBWATCH_`-prefixed environment variables (double-underscore separated,
//! e.g. `JOBWATCH_DATABASE__PATH`). The keyword policy is validated here,
//! before the engine runs; an empty include set is a configuration error.

use std::path::Path;

use anyhow::Context;
use jobwatch_core::{KeywordPolicy, MatchMode};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
polling:
  interval_minutes: 10

database:
  path: "data/jobwatch.db"

matching:
  mode: "tokenized"
  fuzzy_threshold: 0.85
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Career-page sources to scrape each cycle.
    #[serde(default)]
    pub companies: Vec<CompanyConfig>,
    #[serde(default)]
    pub keywords: KeywordsConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// `polling` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

fn default_interval_minutes() -> u64 { 10 }

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_minutes: default_interval_minutes() }
    }
}

/// `database` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String { "data/jobwatch.db".to_string() }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_database_path() }
    }
}

/// One entry of the `companies` list.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    /// Board or organization slug on the career-board API.
    pub board: String,
    pub scraper: ScraperKind,
}

/// Which adapter fetches this company's listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScraperKind {
    Greenhouse,
    Lever,
}

/// `keywords` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// `matching` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_mode")]
    pub mode: MatchModeName,
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

fn default_mode() -> MatchModeName { MatchModeName::Tokenized }
fn default_fuzzy_threshold() -> f64 { 0.85 }

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

/// Matching mode as written in the config file. The threshold is folded into
/// the engine's `MatchMode::Fuzzy` variant during conversion and ignored for
/// the other modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchModeName {
    Exact,
    Tokenized,
    Fuzzy,
}

impl AppConfig {
    /// Load configuration: built-in defaults, then `path` (when given), then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder
            .add_source(config::Environment::with_prefix("JOBWATCH").separator("__"))
            .build()
            .context("failed to assemble configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    /// Built-in defaults without touching the filesystem (useful in tests).
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml))
            .build()
            .expect("built-in default config must be valid YAML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Build the validated keyword policy consumed by the engine.
    pub fn keyword_policy(&self) -> anyhow::Result<KeywordPolicy> {
        let mode = match self.matching.mode {
            MatchModeName::Exact => MatchMode::Exact,
            MatchModeName::Tokenized => MatchMode::Tokenized,
            MatchModeName::Fuzzy => MatchMode::Fuzzy {
                threshold: self.matching.fuzzy_threshold,
            },
        };
        KeywordPolicy::new(
            self.keywords.include.clone(),
            self.keywords.exclude.clone(),
            self.keywords.locations.clone(),
            mode,
        )
        .context("keyword policy rejected")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
