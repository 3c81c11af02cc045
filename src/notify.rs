//! Notification dispatch seam.
//!
//! The engine hands each cycle's accepted listings to a [`Notifier`].
//! Delivery mechanics live behind this trait; the built-in implementation
//! emits through tracing, which is enough for journald/file-based setups.

use anyhow::Result;
use async_trait::async_trait;
use jobwatch_core::NormalizedListing;
use tracing::info;

/// Consumer of confirmed-new matches.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatch one source's accepted listings for this cycle. Only called
    /// with non-empty batches.
    async fn notify(&self, source_company: &str, listings: &[NormalizedListing]) -> Result<()>;
}

/// Emits matches to the log stream.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, source_company: &str, listings: &[NormalizedListing]) -> Result<()> {
        info!(
            company = source_company,
            count = listings.len(),
            "new matching listings"
        );
        for listing in listings {
            info!(
                company = %listing.source_company,
                title = %listing.title,
                url = %listing.url,
                "new listing"
            );
        }
        Ok(())
    }
}
