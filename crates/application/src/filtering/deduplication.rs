use crate::fields;
use crate::ports::SweepOutcome;
use asim_dns_domain::{EventClassification, RawEvent};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Opportunistic prune threshold; beyond this the per-event path scans
/// for stale entries instead of waiting for the periodic sweep.
const MAX_ENTRIES_BEFORE_PRUNE: usize = 10_000;

pub(crate) fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Suppresses repeated (domain, record-type) query requests inside a
/// sliding time window.
///
/// Eviction is lazy: correctness depends only on the age comparison at
/// lookup time, so stale entries may linger until a prune or sweep runs.
/// Two concurrent first-sightings of the same key may both pass before
/// either records itself; that race is accepted best-effort behavior.
pub struct DeduplicationFilter {
    enabled: bool,
    window_secs: u64,
    recent_queries: DashMap<String, u64, FxBuildHasher>,
}

impl DeduplicationFilter {
    pub fn new(enabled: bool, window_secs: u64) -> Self {
        info!(enabled, window_secs, "Deduplication filter initialized");

        Self {
            enabled,
            window_secs,
            recent_queries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn should_filter(&self, event: &RawEvent, classification: EventClassification) -> bool {
        self.should_filter_at(event, classification, now_epoch_secs())
    }

    /// Clock-injected variant of [`should_filter`](Self::should_filter);
    /// the per-event path passes wall time, tests pass fabricated instants.
    pub fn should_filter_at(
        &self,
        event: &RawEvent,
        classification: EventClassification,
        now_secs: u64,
    ) -> bool {
        if !self.enabled || !classification.is_query_request() {
            return false;
        }

        let Some(domain) = fields::domain_name(event) else {
            return false;
        };
        if domain.is_empty() {
            return false;
        }
        let Some(query_type) = fields::query_type_code(event) else {
            return false;
        };

        let cache_key = format!("{}:{}", domain, query_type);

        let last_seen = self.recent_queries.get(&cache_key).map(|entry| *entry);
        if let Some(last_seen) = last_seen {
            if now_secs.saturating_sub(last_seen) < self.window_secs {
                debug!(
                    domain = %domain,
                    query_type,
                    age_secs = now_secs.saturating_sub(last_seen),
                    "Filtering duplicate query"
                );
                return true;
            }
        }

        // First sighting, or outside the window: record and pass through.
        self.recent_queries.insert(cache_key, now_secs);

        if self.recent_queries.len() > MAX_ENTRIES_BEFORE_PRUNE {
            self.prune(now_secs);
        }

        false
    }

    fn prune(&self, now_secs: u64) -> usize {
        let before = self.recent_queries.len();
        self.recent_queries
            .retain(|_, last_seen| now_secs.saturating_sub(*last_seen) <= self.window_secs);
        before.saturating_sub(self.recent_queries.len())
    }

    /// Periodic maintenance entry point for the sweep job.
    pub fn sweep(&self) -> SweepOutcome {
        let entries_removed = self.prune(now_epoch_secs());
        let cache_size = self.recent_queries.len();

        if entries_removed > 0 {
            debug!(entries_removed, cache_size, "Cleaned deduplication cache");
        }

        SweepOutcome {
            entries_removed,
            cache_size,
        }
    }

    pub fn cache_size(&self) -> usize {
        self.recent_queries.len()
    }
}
