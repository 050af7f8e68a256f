//! ASIM DNS Infrastructure Layer
//!
//! Concrete adapters for the application ports: system host identity,
//! record sinks, and the event receiver that ties filtering, mapping
//! and background jobs together.

pub mod logging;
pub mod receiver;
pub mod sink;
pub mod system;

pub use logging::init_logging;
pub use receiver::DnsEventReceiver;
pub use sink::JsonLinesSink;
pub use system::SystemHostInfo;
