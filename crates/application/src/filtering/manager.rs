use super::{
    DeduplicationFilter, DomainFilter, EventTypeClassifier, EventTypeFilter, QueryTypeFilter,
};
use crate::ports::{CacheSweepPort, FilterStatsPort, SweepOutcome};
use asim_dns_domain::{DnsProviderKind, EventClassification, FilteringConfig, RawEvent};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Outcome of running an event through the filter chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    /// The event survived; its classification is handed on so the mapper
    /// does not look it up again.
    Pass(EventClassification),
    Filtered,
}

/// Orchestrates the ordered, short-circuiting filter chain and tracks the
/// aggregate counters. The chain stops at the first matching filter, so
/// only totals are kept, not per-filter hit counts.
pub struct FilterManager {
    classifier: EventTypeClassifier,
    event_type_filter: EventTypeFilter,
    domain_filter: DomainFilter,
    query_type_filter: QueryTypeFilter,
    deduplication_filter: DeduplicationFilter,
    total_events: AtomicU64,
    filtered_events: AtomicU64,
}

impl FilterManager {
    pub fn new(provider: DnsProviderKind, config: &FilteringConfig) -> Self {
        let manager = Self {
            classifier: EventTypeClassifier::new(provider),
            event_type_filter: EventTypeFilter::new(
                config.include_info_events,
                config.excluded_event_ids.iter().copied(),
            ),
            domain_filter: DomainFilter::new(&config.excluded_domains),
            query_type_filter: QueryTypeFilter::new(config.exclude_aaaa_records),
            deduplication_filter: DeduplicationFilter::new(
                config.enable_deduplication,
                config.deduplication_window_secs,
            ),
            total_events: AtomicU64::new(0),
            filtered_events: AtomicU64::new(0),
        };

        info!(provider = %provider, "Filter manager initialized with all components");

        manager
    }

    /// Run one event through the chain. Increments `total_events` once per
    /// call and `filtered_events` once when any filter matches.
    pub fn evaluate(&self, event: &RawEvent) -> FilterVerdict {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        let classification = self.classifier.classify(event.event_id);

        let filtered = self
            .event_type_filter
            .should_filter(event.event_id, classification)
            || self.domain_filter.should_filter(event, classification)
            || self.query_type_filter.should_filter(event, classification)
            || self
                .deduplication_filter
                .should_filter(event, classification);

        if filtered {
            self.filtered_events.fetch_add(1, Ordering::Relaxed);
            FilterVerdict::Filtered
        } else {
            FilterVerdict::Pass(classification)
        }
    }

    pub fn should_filter(&self, event: &RawEvent) -> bool {
        matches!(self.evaluate(event), FilterVerdict::Filtered)
    }

    pub fn dedup_cache_size(&self) -> usize {
        self.deduplication_filter.cache_size()
    }
}

impl FilterStatsPort for FilterManager {
    fn total_events(&self) -> u64 {
        self.total_events.load(Ordering::Relaxed)
    }

    fn filtered_events(&self) -> u64 {
        self.filtered_events.load(Ordering::Relaxed)
    }

    fn filter_percentage(&self) -> f64 {
        let total = self.total_events.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let filtered = self.filtered_events.load(Ordering::Relaxed);
        filtered as f64 / total as f64 * 100.0
    }
}

impl CacheSweepPort for FilterManager {
    fn run_sweep(&self) -> SweepOutcome {
        self.deduplication_filter.sweep()
    }
}
