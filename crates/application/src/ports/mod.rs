mod cache_sweep;
mod event_sink;
mod filter_stats;
mod host_info;

pub use cache_sweep::{CacheSweepPort, SweepOutcome};
pub use event_sink::EventSink;
pub use filter_stats::FilterStatsPort;
pub use host_info::{HostIdentity, HostInfoPort};
