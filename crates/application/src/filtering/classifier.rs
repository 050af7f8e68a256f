use asim_dns_domain::classification::{self, EventClassification};
use asim_dns_domain::DnsProviderKind;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

/// Memoized event-id classifier.
///
/// The table (client or server) is fixed at construction; classification is
/// static for the process lifetime, so cache entries never expire.
pub struct EventTypeClassifier {
    kind: DnsProviderKind,
    cache: DashMap<u16, EventClassification, FxBuildHasher>,
}

impl EventTypeClassifier {
    pub fn new(kind: DnsProviderKind) -> Self {
        Self {
            kind,
            cache: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn provider_kind(&self) -> DnsProviderKind {
        self.kind
    }

    pub fn classify(&self, event_id: u16) -> EventClassification {
        if let Some(cached) = self.cache.get(&event_id) {
            return *cached;
        }

        let classification = classification::classify(self.kind, event_id);
        self.cache.insert(event_id, classification);
        classification
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_and_warm_lookups_agree() {
        let classifier = EventTypeClassifier::new(DnsProviderKind::Client);
        let cold = classifier.classify(3006);
        let warm = classifier.classify(3006);
        assert_eq!(cold, warm);
        assert_eq!(classifier.cache_size(), 1);
    }

    #[test]
    fn unknown_ids_are_cached_too() {
        let classifier = EventTypeClassifier::new(DnsProviderKind::Server);
        assert_eq!(
            classifier.classify(4242),
            EventClassification::info_status()
        );
        assert_eq!(classifier.cache_size(), 1);
    }
}
