use super::flags::{client_query_options, decode_client_flags, decode_server_flags, DnsFlags};
use crate::fields;
use crate::ports::{HostIdentity, HostInfoPort};
use asim_dns_domain::{
    dns_codes, DnsProviderKind, EventClassification, FieldValue, NormalizedRecord, RawEvent,
};
use serde_json::{Map, Value};
use tracing::info;

/// Raw field names consumed by the canonical mapping for client events.
/// Anything else lands in AdditionalFields.
const CLIENT_MAPPED_FIELDS: &[&str] = &[
    "QueryName",
    "QueryType",
    "Status",
    "QueryStatus",
    "ServerList",
    "SourcePort",
    "QueryOptions",
    "QueryDuration",
];

const SERVER_MAPPED_FIELDS: &[&str] = &[
    "QNAME",
    "QTYPE",
    "RCODE",
    "Status",
    "QueryStatus",
    "CLIENT_IP",
    "Source",
    "InterfaceIP",
    "SERVER_IP",
    "Destination",
    "Port",
    "TCP",
    "RD",
    "CD",
    "AA",
    "AD",
    "Zone",
    "QueryDuration",
];

/// Builds canonical records from raw events that survived the filter
/// chain. Every extraction step is optional; a missing or malformed field
/// is omitted, never an error, so mapping cannot fail.
pub struct SchemaMapper {
    provider: DnsProviderKind,
    host: HostIdentity,
}

impl SchemaMapper {
    /// Device identity is captured once at construction; it does not
    /// change within a process run.
    pub fn new(provider: DnsProviderKind, host_info: &dyn HostInfoPort) -> Self {
        let host = host_info.identity();
        info!(
            provider = %provider,
            hostname = %host.hostname,
            "Schema mapper initialized"
        );
        Self { provider, host }
    }

    pub fn map(&self, event: &RawEvent, classification: EventClassification) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(event.timestamp);

        record.set_body(format!(
            "{} Event: {} {} (ID: {})",
            self.provider.product_name(),
            classification.class,
            classification.subclass,
            event.event_id
        ));

        record.put_str("EventType", classification.class.as_str());
        record.put_str("EventSubType", classification.subclass.as_str());
        record.put_int("EventCount", 1);
        record.put_str("EventProduct", self.provider.product_name());
        record.put_str("EventVendor", "Microsoft");
        record.put_str("EventOriginalType", event.event_id.to_string());

        self.set_device_fields(&mut record);
        self.set_query_fields(event, &mut record);
        self.set_network_fields(event, &mut record);
        self.set_flag_fields(event, &mut record);
        self.set_outcome_fields(event, classification, &mut record);

        // Best-effort correlation id; collisions are possible when pid,
        // event id and timestamp coincide.
        record.put_str(
            "DnsSessionId",
            format!(
                "{}-{}-{}",
                event.process_id,
                event.event_id,
                event.timestamp.timestamp_nanos_opt().unwrap_or_default()
            ),
        );

        if let Some(duration) = event.field_i64("QueryDuration") {
            record.put_int("DnsNetworkDuration", duration);
        }

        if self.provider == DnsProviderKind::Server {
            if let Some(zone) = event.field_str("Zone") {
                record.put_str("DnsZone", zone);
            }
        }

        self.set_additional_fields(event, &mut record);

        record
    }

    fn set_device_fields(&self, record: &mut NormalizedRecord) {
        record.put_str("DvcHostname", self.host.hostname.clone());
        record.put_str("Dvc", self.host.hostname.clone());
        record.put_str("DvcOs", self.host.os.clone());
        if let Some(version) = &self.host.os_version {
            record.put_str("DvcOsVersion", version.clone());
        }
        record.put_str("DvcDomainType", self.host.domain_type.clone());
        if let Some(ip) = &self.host.ip_address {
            record.put_str("DvcIpAddr", ip.clone());
        }
    }

    fn set_query_fields(&self, event: &RawEvent, record: &mut NormalizedRecord) {
        if let Some(domain) = fields::domain_name(event) {
            record.put_str("DnsQuery", domain);
        }

        if let Some(code) = fields::query_type_code(event) {
            record.put_int("DnsQueryType", code);
            record.put_str("DnsQueryTypeName", dns_codes::query_type_name(code));
        }
    }

    fn set_network_fields(&self, event: &RawEvent, record: &mut NormalizedRecord) {
        match self.provider {
            DnsProviderKind::Client => {
                if let Some(ip) = &self.host.ip_address {
                    record.put_str("SrcIpAddr", ip.clone());
                }
                if event.process_id != 0 {
                    record.put_str("SrcProcessId", event.process_id.to_string());
                }

                // First entry of the semicolon-separated resolver list.
                if let Some(server_list) = event.field_str("ServerList") {
                    if let Some(server) = server_list.split(';').next().filter(|s| !s.is_empty()) {
                        record.put_str("DstIpAddr", server);
                    }
                }
                if let Some(port) = event.field_i64("SourcePort") {
                    record.put_int("SrcPortNumber", port);
                }

                record.put_str("NetworkProtocol", "DNS");
            }
            DnsProviderKind::Server => {
                record.put_str("SrcProcessId", event.process_id.to_string());

                if let Some(ip) = fields::first_str(event, fields::SOURCE_IP_FIELDS)
                    .filter(|s| !s.is_empty())
                {
                    record.put_str("SrcIpAddr", ip);
                }
                if let Some(ip) =
                    fields::first_str(event, fields::DEST_IP_FIELDS).filter(|s| !s.is_empty())
                {
                    record.put_str("DstIpAddr", ip);
                }
                if let Some(port) = event.field_i64("Port") {
                    record.put_int("SrcPortNumber", port);
                }

                let protocol = match event.field_str("TCP") {
                    Some("1") => "TCP",
                    _ => "UDP",
                };
                record.put_str("NetworkProtocol", protocol);
            }
        }

        record.put_int("DstPortNumber", 53);
    }

    fn set_flag_fields(&self, event: &RawEvent, record: &mut NormalizedRecord) {
        let flags: Option<DnsFlags> = match self.provider {
            // Client flags only exist when the QueryOptions bit-field is
            // present and numeric.
            DnsProviderKind::Client => client_query_options(event).map(decode_client_flags),
            DnsProviderKind::Server => Some(decode_server_flags(event)),
        };

        if let Some(flags) = flags {
            record.put_bool("DnsFlagsRecursionDesired", flags.recursion_desired);
            record.put_bool("DnsFlagsCheckingDisabled", flags.checking_disabled);
            record.put_str("DnsFlags", flags.summary);
        }
    }

    fn set_outcome_fields(
        &self,
        event: &RawEvent,
        classification: EventClassification,
        record: &mut NormalizedRecord,
    ) {
        if !classification.is_query_response() {
            record.put_str("EventResult", "NA");
            record.put_str("EventResultDetails", "NA");
            return;
        }

        match fields::status_code(event) {
            Some(code) => {
                let response_name = dns_codes::response_code_name(code);
                record.put_int("DnsResponseCode", code);
                record.put_str("DnsResponseName", response_name.clone());
                record.put_str(
                    "EventResult",
                    if code == 0 { "Success" } else { "Failure" },
                );
                record.put_str("EventResultDetails", response_name);
            }
            // A response with no status field at all.
            None => {
                record.put_str("EventResult", "Unknown");
                record.put_str("EventResultDetails", "NoStatusCode");
            }
        }
    }

    fn set_additional_fields(&self, event: &RawEvent, record: &mut NormalizedRecord) {
        let mapped = match self.provider {
            DnsProviderKind::Client => CLIENT_MAPPED_FIELDS,
            DnsProviderKind::Server => SERVER_MAPPED_FIELDS,
        };

        let mut additional = Map::new();
        for (key, value) in &event.event_data {
            if mapped.contains(&key.as_str()) {
                continue;
            }
            let json_value = match value {
                FieldValue::Str(s) => Value::String(s.clone()),
                FieldValue::Int(n) => Value::Number((*n).into()),
            };
            additional.insert(key.clone(), json_value);
        }

        let serialized = if additional.is_empty() {
            "{}".to_string()
        } else {
            serde_json::to_string(&Value::Object(additional)).unwrap_or_else(|_| "{}".to_string())
        };

        record.put_str("AdditionalFields", serialized);
    }
}
