use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// ETW provider GUID for Microsoft-Windows-DNS-Client.
pub const DNS_CLIENT_PROVIDER_GUID: &str = "{1C95126E-7EEA-49A9-A3FE-A378B03DDB4D}";

/// ETW provider GUID for Microsoft-Windows-DNSServer analytical events.
pub const DNS_SERVER_PROVIDER_GUID: &str = "{EB79061A-A566-4698-9119-3ED2807060E7}";

/// Which trace provider the receiver was configured against.
///
/// Client and server providers reuse overlapping event-id ranges with
/// different meanings, so the kind is fixed at construction and never
/// inferred from individual events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsProviderKind {
    Client,
    Server,
}

impl DnsProviderKind {
    pub fn default_guid(&self) -> &'static str {
        match self {
            DnsProviderKind::Client => DNS_CLIENT_PROVIDER_GUID,
            DnsProviderKind::Server => DNS_SERVER_PROVIDER_GUID,
        }
    }

    /// Value of the EventProduct attribute on normalized records.
    pub fn product_name(&self) -> &'static str {
        match self {
            DnsProviderKind::Client => "DNS Client",
            DnsProviderKind::Server => "DNS Server",
        }
    }
}

impl fmt::Display for DnsProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsProviderKind::Client => write!(f, "client"),
            DnsProviderKind::Server => write!(f, "server"),
        }
    }
}

impl FromStr for DnsProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(DnsProviderKind::Client),
            "server" => Ok(DnsProviderKind::Server),
            _ => Err(format!("Unknown provider kind: {}", s)),
        }
    }
}

/// A single value in the raw per-event field bag.
///
/// Trace payloads are heterogeneous: the same logical field may arrive as a
/// string on one event id and an integer on another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            FieldValue::Int(_) => None,
        }
    }

    /// Numeric view of the value; numeric strings parse, anything else is None.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

/// A platform-native DNS trace event as delivered by the upstream session.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub event_id: u16,
    pub timestamp: DateTime<Utc>,
    pub process_id: u32,
    pub provider_guid: String,
    pub event_data: HashMap<String, FieldValue>,
}

impl RawEvent {
    pub fn new(event_id: u16, timestamp: DateTime<Utc>, process_id: u32) -> Self {
        Self {
            event_id,
            timestamp,
            process_id,
            provider_guid: String::new(),
            event_data: HashMap::new(),
        }
    }

    pub fn with_provider_guid(mut self, guid: impl Into<String>) -> Self {
        self.provider_guid = guid.into();
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.event_data.insert(key.into(), value.into());
        self
    }

    /// String value of a raw field, when present and string-typed.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.event_data.get(key).and_then(FieldValue::as_str)
    }

    /// Numeric value of a raw field; numeric strings are accepted.
    pub fn field_i64(&self, key: &str) -> Option<i64> {
        self.event_data.get(key).and_then(FieldValue::as_i64)
    }
}
