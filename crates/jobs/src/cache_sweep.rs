use asim_dns_application::ports::CacheSweepPort;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

/// Periodically evicts stale entries from the deduplication cache.
///
/// Runs independently of per-event traffic; the per-event path only
/// prunes opportunistically when the cache grows large.
pub struct CacheSweepJob {
    sweep: Arc<dyn CacheSweepPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(sweep: Arc<dyn CacheSweepPort>) -> Self {
        Self {
            sweep,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(&self) {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheSweepJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let outcome = self.sweep.run_sweep();
                    if outcome.entries_removed > 0 {
                        info!(
                            entries_removed = outcome.entries_removed,
                            cache_size = outcome.cache_size,
                            "Deduplication cache sweep completed"
                        );
                    }
                }
            }
        }
    }
}
