use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Event ids excluded by default when informational events are not wanted.
/// These carry low security value on the client provider.
pub const DEFAULT_EXCLUDED_EVENT_IDS: [u16; 4] = [1001, 1015, 1016, 1019];

/// Default deduplication window when enabled but unset.
pub const DEFAULT_DEDUPLICATION_WINDOW_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FilteringConfig {
    /// Keep events whose classified type is informational.
    #[serde(default)]
    pub include_info_events: bool,

    /// Event ids dropped unconditionally.
    #[serde(default)]
    pub excluded_event_ids: HashSet<u16>,

    /// Glob-style domain exclusion patterns, applied in order.
    #[serde(default)]
    pub excluded_domains: Vec<String>,

    /// Drop AAAA-type query requests.
    #[serde(default)]
    pub exclude_aaaa_records: bool,

    /// Suppress repeated (domain, record-type) requests.
    #[serde(default)]
    pub enable_deduplication: bool,

    /// Sliding window for deduplication, in seconds.
    #[serde(default)]
    pub deduplication_window_secs: u64,
}
