use crate::{CacheSweepJob, StatsReportJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Collects the receiver's background jobs and spawns them against a
/// shared shutdown token. Handles are returned so the owner can join
/// every job before reporting shutdown complete.
pub struct JobRunner {
    cache_sweep: Option<CacheSweepJob>,
    stats_report: Option<StatsReportJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_sweep: None,
            stats_report: None,
            shutdown: None,
        }
    }

    pub fn with_cache_sweep(mut self, job: CacheSweepJob) -> Self {
        self.cache_sweep = Some(job);
        self
    }

    pub fn with_stats_report(mut self, job: StatsReportJob) -> Self {
        self.stats_report = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();

        if let Some(job) = self.cache_sweep {
            let job = match &self.shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            handles.push(Arc::new(job).spawn());
        }

        if let Some(job) = self.stats_report {
            let job = match &self.shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            handles.push(Arc::new(job).spawn());
        }

        info!(jobs = handles.len(), "All background jobs started");

        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
