use asim_dns_application::ports::FilterStatsPort;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_REPORT_INTERVAL_SECS: u64 = 10;

/// Periodically logs aggregate filtering statistics.
pub struct StatsReportJob {
    stats: Arc<dyn FilterStatsPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatsReportJob {
    pub fn new(stats: Arc<dyn FilterStatsPort>) -> Self {
        Self {
            stats,
            interval_secs: DEFAULT_REPORT_INTERVAL_SECS,
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
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("StatsReportJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let total = self.stats.total_events();
                    let filtered = self.stats.filtered_events();
                    // The two counter reads are not atomic together; events
                    // filtered in between can make filtered exceed total.
                    let passed = total.saturating_sub(filtered);
                    info!(
                        total_received = total,
                        filtered_count = filtered,
                        passed_filters = passed,
                        filter_percentage = self.stats.filter_percentage(),
                        "DNS event statistics"
                    );
                }
            }
        }
    }
}
