//! Integration configurations: OpenWeatherMap and ipapi.co.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to `integration_weather`'s `WeatherConfig`
    ///
    /// A missing key becomes an empty string, which the client rejects
    /// before sending any request.
    #[must_use]
    pub fn to_weather_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().trim().to_string())
                .unwrap_or_default(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Geolocation Configuration
// ==============================

/// IP geolocation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationAppConfig {
    /// ipapi.co base URL
    #[serde(default = "default_geolocation_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geolocation_timeout")]
    pub timeout_secs: u64,
}

fn default_geolocation_base_url() -> String {
    "https://ipapi.co".to_string()
}

const fn default_geolocation_timeout() -> u64 {
    5
}

impl Default for GeolocationAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geolocation_base_url(),
            timeout_secs: default_geolocation_timeout(),
        }
    }
}

impl GeolocationAppConfig {
    /// Convert to `integration_geolocation`'s `GeolocationConfig`
    #[must_use]
    pub fn to_geolocation_config(&self) -> integration_geolocation::GeolocationConfig {
        integration_geolocation::GeolocationConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
