//! Reconciliation of raw, source-specific field names onto canonical
//! meanings. Each synonym list is tried in order; the first field that is
//! present and convertible wins.

use asim_dns_domain::RawEvent;

/// Domain name of a query event: client payloads use `QueryName`, server
/// payloads use `QNAME`.
pub const DOMAIN_FIELDS: &[&str] = &["QueryName", "QNAME"];

/// Record-type code of a query event.
pub const QUERY_TYPE_FIELDS: &[&str] = &["QueryType", "QTYPE"];

/// Response status code of a response event.
pub const STATUS_FIELDS: &[&str] = &["Status", "QueryStatus", "RCODE"];

/// Client address on server-side events.
pub const SOURCE_IP_FIELDS: &[&str] = &["CLIENT_IP", "Source", "InterfaceIP"];

/// Server address on server-side events.
pub const DEST_IP_FIELDS: &[&str] = &["SERVER_IP", "Destination"];

pub fn first_str<'a>(event: &'a RawEvent, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| event.field_str(key))
}

pub fn first_i64(event: &RawEvent, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| event.field_i64(key))
}

pub fn domain_name(event: &RawEvent) -> Option<&str> {
    first_str(event, DOMAIN_FIELDS)
}

pub fn query_type_code(event: &RawEvent) -> Option<i64> {
    first_i64(event, QUERY_TYPE_FIELDS)
}

pub fn status_code(event: &RawEvent) -> Option<i64> {
    first_i64(event, STATUS_FIELDS)
}
