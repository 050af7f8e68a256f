use asim_dns_domain::{EventClass, EventClassification};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Drops events by explicit id, and informational events unless wanted.
pub struct EventTypeFilter {
    include_info_events: bool,
    excluded_event_ids: FxHashSet<u16>,
}

impl EventTypeFilter {
    pub fn new(include_info_events: bool, excluded_event_ids: impl IntoIterator<Item = u16>) -> Self {
        let excluded_event_ids: FxHashSet<u16> = excluded_event_ids.into_iter().collect();

        info!(
            include_info_events,
            excluded_event_ids = excluded_event_ids.len(),
            "Event type filter initialized"
        );

        Self {
            include_info_events,
            excluded_event_ids,
        }
    }

    pub fn should_filter(&self, event_id: u16, classification: EventClassification) -> bool {
        if self.excluded_event_ids.contains(&event_id) {
            debug!(event_id, "Filtering event by id");
            return true;
        }

        if !self.include_info_events && classification.class == EventClass::Info {
            debug!(
                event_id,
                event_type = %classification.class,
                event_subtype = %classification.subclass,
                "Filtering informational event"
            );
            return true;
        }

        false
    }
}
