use crate::fields;
use asim_dns_domain::dns_codes::AAAA_RECORD_TYPE;
use asim_dns_domain::{EventClassification, RawEvent};
use tracing::{debug, info};

/// Optionally drops AAAA-type query requests.
pub struct QueryTypeFilter {
    exclude_aaaa_records: bool,
}

impl QueryTypeFilter {
    pub fn new(exclude_aaaa_records: bool) -> Self {
        info!(exclude_aaaa_records, "Query type filter initialized");
        Self {
            exclude_aaaa_records,
        }
    }

    pub fn should_filter(&self, event: &RawEvent, classification: EventClassification) -> bool {
        if !self.exclude_aaaa_records || !classification.is_query_request() {
            return false;
        }

        let Some(code) = fields::query_type_code(event) else {
            return false;
        };

        let is_aaaa = code == AAAA_RECORD_TYPE;
        if is_aaaa {
            debug!(
                domain = fields::domain_name(event).unwrap_or("<unknown>"),
                query_type = code,
                "Filtering AAAA record"
            );
        }

        is_aaaa
    }
}
