use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::filtering::{
    FilteringConfig, DEFAULT_DEDUPLICATION_WINDOW_SECS, DEFAULT_EXCLUDED_EVENT_IDS,
};
use super::logging::LoggingConfig;
use super::session::SessionConfig;

/// Main configuration structure for the ASIM DNS receiver
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Trace session settings (session name, provider, level)
    #[serde(default)]
    pub session: SessionConfig,

    /// Noise-suppression settings
    #[serde(default)]
    pub filtering: FilteringConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. asim-dns.toml in current directory
    /// 3. /etc/asim-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("asim-dns.toml").exists() {
            Self::from_file("asim-dns.toml")?
        } else if std::path::Path::new("/etc/asim-dns/config.toml").exists() {
            Self::from_file("/etc/asim-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Fill in values the file left unset
    pub fn apply_defaults(&mut self) {
        if self.session.provider_guid.is_empty() {
            self.session.provider_guid = self.session.provider.default_guid().to_string();
        }

        // Informational events are excluded by default; seed the id list
        // only when the operator supplied none.
        if !self.filtering.include_info_events && self.filtering.excluded_event_ids.is_empty() {
            self.filtering.excluded_event_ids = DEFAULT_EXCLUDED_EVENT_IDS.into_iter().collect();
        }

        if self.filtering.enable_deduplication && self.filtering.deduplication_window_secs == 0 {
            self.filtering.deduplication_window_secs = DEFAULT_DEDUPLICATION_WINDOW_SECS;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.name.is_empty() {
            return Err(ConfigError::Validation(
                "Session name cannot be empty".to_string(),
            ));
        }

        if self.filtering.enable_deduplication && self.filtering.deduplication_window_secs == 0 {
            return Err(ConfigError::Validation(
                "Deduplication window cannot be 0 when deduplication is enabled".to_string(),
            ));
        }

        Ok(())
    }
}
