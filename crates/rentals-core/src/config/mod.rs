//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file layered with
//! `RENTALS__`-prefixed environment variables via the `config` crate.
//! Every section falls back to serde defaults, so an absent file yields a
//! usable configuration.

pub mod display;
pub mod logging;
pub mod pagination;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::display::DisplayConfig;
use self::logging::LoggingConfig;
use self::pagination::PaginationConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// List pagination settings.
    pub pagination: PaginationConfig,
    /// Currency and date display settings.
    pub display: DisplayConfig,
    /// Fixture data settings.
    pub fixtures: FixturesConfig,
}

/// Where fixture records come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixturesConfig {
    /// Path to a JSON fixture file replacing the embedded data set.
    #[serde(default)]
    pub path: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `RENTALS`
    /// prefix with `__` as the section separator, e.g.
    /// `RENTALS__PAGINATION__DEFAULT_PAGE_SIZE=20`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("RENTALS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        debug!(path, "Configuration loaded");
        Ok(parsed)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.pagination.validate()?;
        self.display.validate()?;
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("config/does-not-exist").expect("defaults");
        assert_eq!(config.pagination.default_page_size, 12);
        assert_eq!(config.display.currency_symbol, "₦");
        assert!(config.fixtures.path.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = AppConfig::default();
        config.pagination.default_page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_date_format() {
        let mut config = AppConfig::default();
        config.display.date_format = "%Q".to_string();
        assert!(config.validate().is_err());
    }
}
