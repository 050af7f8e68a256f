mod errors;
mod filtering;
mod logging;
mod root;
mod session;

pub use errors::ConfigError;
pub use filtering::FilteringConfig;
pub use logging::LoggingConfig;
pub use root::Config;
pub use session::SessionConfig;
