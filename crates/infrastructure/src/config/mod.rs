//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenWeatherMap and ipapi.co
//! - `cache`: response cache TTL and capacity
//!
//! Logging settings live next to the subscriber setup in `telemetry`.

mod cache;
mod integrations;

use std::path::Path;

use domain::{ThemeMode, UnitSystem};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cache::CacheConfig;
pub use integrations::{GeolocationAppConfig, WeatherAppConfig};

use crate::telemetry::LoggingConfig;

/// File name (without extension) searched in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "nimbus";

/// Prefix for environment overrides, e.g. `NIMBUS_CACHE__TTL_SECS=60`
pub const ENV_PREFIX: &str = "NIMBUS";

/// Conventional variable consulted when no API key is configured
pub const API_KEY_FALLBACK_VAR: &str = "OPENWEATHER_API_KEY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Presentation defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial color theme
    #[serde(default)]
    pub theme: ThemeMode,

    /// Initial unit system
    #[serde(default)]
    pub units: UnitSystem,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// IP geolocation configuration
    #[serde(default)]
    pub geolocation: GeolocationAppConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Presentation defaults
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration, reading `path` instead of `nimbus.toml` when given
    ///
    /// Sources in increasing priority: built-in defaults, the file,
    /// `NIMBUS_*` environment variables, then `OPENWEATHER_API_KEY` if no key
    /// was set anywhere else. An explicit `path` must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., NIMBUS_WEATHER__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_api_key_fallback(std::env::var(API_KEY_FALLBACK_VAR).ok());
        debug!(
            has_api_key = config.weather.has_api_key(),
            cache_enabled = config.cache.enabled,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Use `fallback` as the API key when none is configured
    ///
    /// Existing non-blank keys are never overridden.
    pub fn apply_api_key_fallback(&mut self, fallback: Option<String>) {
        if self.weather.has_api_key() {
            return;
        }
        if let Some(key) = fallback.filter(|k| !k.trim().is_empty()) {
            self.weather.api_key = Some(SecretString::from(key));
        }
    }
}
