use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jobwatch::{config::AppConfig, notify::LogNotifier, scheduler, sources};
use jobwatch_core::SqliteStore;
use tracing::warn;

#[derive(Parser)]
#[command(name = "jobwatch", about = "Career-page job alerts — scrape, match, dedupe, notify")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a single cycle and exit instead of looping.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::load(cli.config.as_deref())?;
    let policy = cfg.keyword_policy()?;

    if let Some(parent) = std::path::Path::new(&cfg.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create database directory {parent:?}"))?;
        }
    }
    let store = SqliteStore::open(&cfg.database.path)
        .await
        .with_context(|| format!("failed to open dedup store at {}", cfg.database.path))?;

    let client = sources::http_client()?;
    let source_list = sources::build_sources(&cfg.companies, &client);
    if source_list.is_empty() {
        warn!("no companies configured; nothing to scrape");
    }
    let notifier = LogNotifier;

    if cli.once {
        scheduler::run_cycle(&store, &policy, &source_list, &notifier).await;
    } else {
        scheduler::run_loop(
            &store,
            &policy,
            &source_list,
            &notifier,
            cfg.polling.interval_minutes,
        )
        .await;
    }

    Ok(())
}
