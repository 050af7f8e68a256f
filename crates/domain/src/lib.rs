//! ASIM DNS Domain Layer
pub mod classification;
pub mod config;
pub mod dns_codes;
pub mod errors;
pub mod raw_event;
pub mod record;

pub use classification::{EventClass, EventClassification, EventSubclass};
pub use config::{Config, ConfigError, FilteringConfig, LoggingConfig, SessionConfig};
pub use dns_codes::{query_type_name, response_code_name};
pub use errors::DomainError;
pub use raw_event::{DnsProviderKind, FieldValue, RawEvent};
pub use record::{AttrValue, NormalizedRecord};
