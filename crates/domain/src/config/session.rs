use crate::raw_event::DnsProviderKind;
use serde::{Deserialize, Serialize};

/// Trace-session settings handed to the acquisition layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the OS tracing session.
    #[serde(default = "default_session_name")]
    pub name: String,

    /// Which provider table and default settings apply.
    #[serde(default = "default_provider")]
    pub provider: DnsProviderKind,

    /// Provider GUID; defaults per provider kind when empty.
    #[serde(default)]
    pub provider_guid: String,

    /// Keyword flags for the trace provider.
    #[serde(default = "default_enable_flags")]
    pub enable_flags: u64,

    /// Verbosity level of event tracing.
    #[serde(default = "default_enable_level")]
    pub enable_level: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: default_session_name(),
            provider: default_provider(),
            provider_guid: String::new(),
            enable_flags: default_enable_flags(),
            enable_level: default_enable_level(),
        }
    }
}

fn default_session_name() -> String {
    "AsimDnsTrace".to_string()
}

fn default_provider() -> DnsProviderKind {
    DnsProviderKind::Client
}

fn default_enable_flags() -> u64 {
    0x8000000000000FFF
}

fn default_enable_level() -> u8 {
    5
}
