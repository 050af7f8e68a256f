use asim_dns_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber from the `[logging]` config
/// section. `RUST_LOG` wins over the configured level when set. Calling
/// this more than once is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
