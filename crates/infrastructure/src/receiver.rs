use asim_dns_application::ports::{EventSink, FilterStatsPort, HostInfoPort};
use asim_dns_application::{FilterManager, FilterVerdict, SchemaMapper};
use asim_dns_domain::{Config, DomainError, RawEvent};
use asim_dns_jobs::{CacheSweepJob, JobRunner, StatsReportJob};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// End-to-end event pipeline: raw trace events come in, pass the filter
/// chain, get mapped to normalized records and handed to the sink.
///
/// Owns the background jobs it spawns; `shutdown` cancels and joins all
/// of them before returning.
pub struct DnsEventReceiver {
    filters: Arc<FilterManager>,
    mapper: SchemaMapper,
    sink: Arc<dyn EventSink>,
    shutdown: CancellationToken,
    job_handles: Mutex<Vec<JoinHandle<()>>>,
    dedup_enabled: bool,
}

impl DnsEventReceiver {
    pub fn new(config: &Config, host_info: &dyn HostInfoPort, sink: Arc<dyn EventSink>) -> Self {
        let provider = config.session.provider;
        let filters = Arc::new(FilterManager::new(provider, &config.filtering));
        let mapper = SchemaMapper::new(provider, host_info);

        info!(
            provider = %provider,
            session = %config.session.name,
            deduplication = config.filtering.enable_deduplication,
            "DNS event receiver created"
        );

        Self {
            filters,
            mapper,
            sink,
            shutdown: CancellationToken::new(),
            job_handles: Mutex::new(Vec::new()),
            dedup_enabled: config.filtering.enable_deduplication,
        }
    }

    /// Spawns the background jobs. Safe to call once; the sweep job is
    /// only started when deduplication is enabled.
    pub async fn start(&self) {
        let mut runner = JobRunner::new()
            .with_stats_report(StatsReportJob::new(self.filters.clone()))
            .with_shutdown_token(self.shutdown.clone());

        if self.dedup_enabled {
            runner = runner.with_cache_sweep(CacheSweepJob::new(self.filters.clone()));
        }

        let handles = runner.start();
        self.job_handles.lock().await.extend(handles);
    }

    /// Per-event path: filter, map, deliver. Filtered events are dropped
    /// silently. Sink failures are logged and swallowed; no retry and no
    /// backpressure flows back into the chain.
    pub async fn handle_event(&self, event: RawEvent) -> Result<(), DomainError> {
        if self.shutdown.is_cancelled() {
            return Err(DomainError::ReceiverShutDown);
        }

        if let FilterVerdict::Pass(classification) = self.filters.evaluate(&event) {
            let record = self.mapper.map(&event, classification);
            if let Err(e) = self.sink.consume(record).await {
                error!(event_id = event.event_id, error = %e, "Failed to deliver normalized record");
            }
        }

        Ok(())
    }

    /// Cancels the shutdown token and joins every background job, then
    /// logs the final aggregate statistics.
    pub async fn shutdown(&self) {
        info!("Shutting down DNS event receiver");
        self.shutdown.cancel();

        let handles: Vec<_> = self.job_handles.lock().await.drain(..).collect();
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Background job terminated abnormally");
            }
        }

        info!(
            total_received = self.filters.total_events(),
            filtered_count = self.filters.filtered_events(),
            filter_percentage = self.filters.filter_percentage(),
            "DNS event receiver stopped"
        );
    }

    pub fn filter_manager(&self) -> &FilterManager {
        &self.filters
    }
}
