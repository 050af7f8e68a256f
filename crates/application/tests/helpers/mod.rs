#![allow(dead_code)]

use asim_dns_application::ports::{HostIdentity, HostInfoPort};
use asim_dns_domain::RawEvent;
use chrono::{DateTime, TimeZone, Utc};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Client-provider query request (event id 3006).
pub fn query_request(domain: &str, query_type: i64) -> RawEvent {
    RawEvent::new(3006, base_time(), 1234)
        .with_field("QueryName", domain)
        .with_field("QueryType", query_type.to_string())
}

/// Client-provider query response (event id 3008).
pub fn query_response(domain: &str, status: i64) -> RawEvent {
    RawEvent::new(3008, base_time(), 1234)
        .with_field("QueryName", domain)
        .with_field("QueryType", "1")
        .with_field("Status", status.to_string())
}

/// Server-provider query response (event id 258).
pub fn server_response(domain: &str, rcode: i64) -> RawEvent {
    RawEvent::new(258, base_time(), 4)
        .with_field("QNAME", domain)
        .with_field("QTYPE", "1")
        .with_field("RCODE", rcode.to_string())
}

pub struct FixedHostInfo;

impl HostInfoPort for FixedHostInfo {
    fn identity(&self) -> HostIdentity {
        HostIdentity {
            hostname: "testhost".to_string(),
            ip_address: Some("192.0.2.10".to_string()),
            os: "Windows".to_string(),
            os_version: Some("10.0.19042.1466".to_string()),
            domain_type: "WORKGROUP".to_string(),
        }
    }
}
