use crate::raw_event::DnsProviderKind;
use std::fmt;

/// Semantic type of a trace event under the normalized schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventClass {
    Query,
    DnsCache,
    Info,
}

impl EventClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventClass::Query => "Query",
            EventClass::DnsCache => "DnsCache",
            EventClass::Info => "Info",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of the event within its semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSubclass {
    Request,
    Response,
    Recursive,
    Add,
    Remove,
    Status,
}

impl EventSubclass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSubclass::Request => "request",
            EventSubclass::Response => "response",
            EventSubclass::Recursive => "recursive",
            EventSubclass::Add => "add",
            EventSubclass::Remove => "remove",
            EventSubclass::Status => "status",
        }
    }
}

impl fmt::Display for EventSubclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// (type, subtype) pair derived from a numeric event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventClassification {
    pub class: EventClass,
    pub subclass: EventSubclass,
}

impl EventClassification {
    pub const fn new(class: EventClass, subclass: EventSubclass) -> Self {
        Self { class, subclass }
    }

    /// Default bucket for identifiers the selected table does not know.
    pub const fn info_status() -> Self {
        Self::new(EventClass::Info, EventSubclass::Status)
    }

    pub fn is_query(&self) -> bool {
        self.class == EventClass::Query
    }

    pub fn is_query_request(&self) -> bool {
        self.class == EventClass::Query && self.subclass == EventSubclass::Request
    }

    pub fn is_query_response(&self) -> bool {
        self.class == EventClass::Query && self.subclass == EventSubclass::Response
    }
}

/// Classify a DNS Client provider event id. Total: unknown ids fall into
/// the Info/status bucket.
pub fn classify_client(event_id: u16) -> EventClassification {
    use EventSubclass::*;
    match event_id {
        3006 => EventClassification::new(EventClass::Query, Request),
        3008 => EventClassification::new(EventClass::Query, Response),
        3020 => EventClassification::new(EventClass::DnsCache, Add),
        3019 => EventClassification::new(EventClass::DnsCache, Remove),
        _ => EventClassification::info_status(),
    }
}

/// Classify a DNS Server provider event id. The id ranges overlap with the
/// client table but carry different meanings.
pub fn classify_server(event_id: u16) -> EventClassification {
    use EventSubclass::*;
    match event_id {
        256 | 257 => EventClassification::new(EventClass::Query, Request),
        258 | 259 => EventClassification::new(EventClass::Query, Response),
        260 | 261 => EventClassification::new(EventClass::Query, Recursive),
        _ => EventClassification::info_status(),
    }
}

/// Classify against the table selected by provider kind.
pub fn classify(kind: DnsProviderKind, event_id: u16) -> EventClassification {
    match kind {
        DnsProviderKind::Client => classify_client(event_id),
        DnsProviderKind::Server => classify_server(event_id),
    }
}
