//! Periodic driver — invokes the core pipeline once per cycle, per source.
//!
//! Sources run concurrently within a cycle; the dedup store serializes
//! racing identities, so overlap is harmless. Per-source failures (fetch,
//! store, dispatch) are logged once with the source name and do not stop
//! the other sources or the loop. A batch that fails in the store sends no
//! partial notifications.

use std::time::Duration;

use jobwatch_core::{pipeline, DedupStore, KeywordPolicy};
use tracing::{error, info, warn};

use crate::notify::Notifier;
use crate::sources::ListingSource;

/// Run one cycle over every configured source.
pub async fn run_cycle(
    store: &dyn DedupStore,
    policy: &KeywordPolicy,
    sources: &[Box<dyn ListingSource>],
    notifier: &dyn Notifier,
) {
    let runs = sources.iter().map(|source| async move {
        let company = source.company();

        let raws = match source.fetch().await {
            Ok(raws) => raws,
            Err(err) => {
                warn!(company, cause = %err, "fetch failed, skipping source this cycle");
                return;
            }
        };
        let fetched = raws.len();

        let accepted = match pipeline::run_batch(store, policy, company, raws).await {
            Ok(accepted) => accepted,
            Err(err) => {
                error!(company, cause = %err, "batch failed, no notifications sent");
                return;
            }
        };

        info!(company, fetched, accepted = accepted.len(), "cycle complete for source");
        if accepted.is_empty() {
            return;
        }
        if let Err(err) = notifier.notify(company, &accepted).await {
            warn!(company, cause = %err, "notification dispatch failed");
        }
    });

    futures::future::join_all(runs).await;
}

/// Run cycles forever at the configured interval, starting immediately.
/// Returns when Ctrl-C is received.
pub async fn run_loop(
    store: &dyn DedupStore,
    policy: &KeywordPolicy,
    sources: &[Box<dyn ListingSource>],
    notifier: &dyn Notifier,
    interval_minutes: u64,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_minutes * 60));
    info!(interval_minutes, "scheduler started");

    loop {
        tokio::select! {
            _ = interval.tick() => run_cycle(store, policy, sources, notifier).await,
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                return;
            }
        }
    }
}
