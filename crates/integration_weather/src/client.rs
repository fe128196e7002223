//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use domain::UnitSystem;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    ApiErrorBody, CurrentWeather, CurrentWeatherResponse, Forecast, ForecastEntry,
    ForecastResponse, primary_condition,
};

/// Format of the `dt_txt` field in forecast entries
const FORECAST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// City used by the health check
const HEALTH_CHECK_CITY: &str = "London";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider does not know the city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Missing or rejected API key
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data by city name
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn get_current(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CurrentWeather, WeatherError>;

    /// Get the 5 day / 3 hour forecast for a city
    async fn get_forecast(&self, city: &str, units: UnitSystem) -> Result<Forecast, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the URL of an API endpoint
    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET for `endpoint` and decode the JSON body
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        units: UnitSystem,
    ) -> Result<T, WeatherError> {
        if self.config.api_key.trim().is_empty() {
            return Err(WeatherError::InvalidApiKey);
        }

        let url = self.endpoint(endpoint);
        debug!(url = %url, city = %city, units = %units, "Requesting weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status(status, city, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Map a non-success status to an error
    fn map_status(status: StatusCode, city: &str, body: &str) -> WeatherError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(city.to_string()),
            StatusCode::UNAUTHORIZED => WeatherError::InvalidApiKey,
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s if message.is_empty() => WeatherError::RequestFailed(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}: {message}")),
        }
    }

    /// Convert the raw `/weather` payload
    fn parse_current(data: CurrentWeatherResponse, units: UnitSystem) -> CurrentWeather {
        let (description, icon) = primary_condition(&data.weather);
        let observed_at = DateTime::<Utc>::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now);

        CurrentWeather {
            city: data.name,
            country: data.sys.country,
            temperature: data.main.temp,
            feels_like: data.main.feels_like.unwrap_or(data.main.temp),
            humidity: data.main.humidity.min(100),
            pressure: data.main.pressure,
            description,
            icon,
            wind_speed: data.wind.speed,
            cloudiness: data.clouds.all.min(100),
            observed_at,
            units,
        }
    }

    /// Convert the raw `/forecast` payload
    fn parse_forecast(data: ForecastResponse, units: UnitSystem) -> Result<Forecast, WeatherError> {
        let entries = data
            .list
            .iter()
            .map(|item| {
                let time = Self::parse_forecast_time(&item.dt_txt)?;
                let (description, icon) = primary_condition(&item.weather);
                Ok(ForecastEntry {
                    time,
                    temperature: item.main.temp,
                    description,
                    icon,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        let (city, country) = data
            .city
            .map_or((None, String::new()), |c| (Some(c.name), c.country));

        Ok(Forecast {
            city,
            country,
            entries,
            units,
        })
    }

    /// Parse a `dt_txt` value
    fn parse_forecast_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
        NaiveDateTime::parse_from_str(s, FORECAST_TIME_FORMAT)
            .map_err(|e| WeatherError::ParseError(format!("Invalid forecast time '{s}': {e}")))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn get_current(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CurrentWeather, WeatherError> {
        let data: CurrentWeatherResponse = self.fetch("weather", city, units).await?;
        let current = Self::parse_current(data, units);
        debug!(
            temperature = current.temperature,
            description = %current.description,
            "Retrieved current weather"
        );
        Ok(current)
    }

    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn get_forecast(&self, city: &str, units: UnitSystem) -> Result<Forecast, WeatherError> {
        let data: ForecastResponse = self.fetch("forecast", city, units).await?;
        let forecast = Self::parse_forecast(data, units)?;
        if forecast.entries.is_empty() {
            warn!("Forecast response contained no entries");
        }
        debug!(entries = forecast.entries.len(), "Retrieved weather forecast");
        Ok(forecast)
    }

    async fn is_healthy(&self) -> bool {
        self.get_current(HEALTH_CHECK_CITY, UnitSystem::Metric)
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CloudData, ConditionData, ForecastCity, ForecastItem, MainData, SysData, WindData,
    };

    fn client() -> OpenWeatherMapClient {
        OpenWeatherMapClient::new(WeatherConfig {
            api_key: "test-key".to_string(),
            ..WeatherConfig::default()
        })
        .expect("client creation should succeed")
    }

    fn main_data(temp: f64) -> MainData {
        MainData {
            temp,
            feels_like: Some(temp - 1.0),
            humidity: 70,
            pressure: 1010,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = WeatherConfig {
            api_key: "super-secret".to_string(),
            ..WeatherConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_config_serialization_skips_key() {
        let config = WeatherConfig {
            api_key: "super-secret".to_string(),
            ..WeatherConfig::default()
        };
        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("super-secret"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenWeatherMapClient::new(WeatherConfig {
            base_url: "http://localhost:1234/".to_string(),
            ..WeatherConfig::default()
        })
        .expect("client creation should succeed");
        assert_eq!(client.endpoint("weather"), "http://localhost:1234/weather");
    }

    #[test]
    fn test_map_status() {
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::NOT_FOUND, "Atlantis", ""),
            WeatherError::CityNotFound(ref c) if c == "Atlantis"
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::UNAUTHORIZED, "x", ""),
            WeatherError::InvalidApiKey
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::TOO_MANY_REQUESTS, "x", ""),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::BAD_GATEWAY, "x", ""),
            WeatherError::ServiceUnavailable(_)
        ));
    }

    #[test]
    fn test_map_status_includes_provider_message() {
        let err = OpenWeatherMapClient::map_status(
            StatusCode::BAD_REQUEST,
            "x",
            r#"{"cod":"400","message":"Nothing to geocode"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Request failed: HTTP 400 Bad Request: Nothing to geocode"
        );
    }

    #[test]
    fn test_parse_current() {
        let data = CurrentWeatherResponse {
            name: "Paris".to_string(),
            sys: SysData {
                country: "FR".to_string(),
            },
            main: main_data(12.0),
            weather: vec![ConditionData {
                description: "broken clouds".to_string(),
                icon: "04d".to_string(),
            }],
            wind: WindData { speed: 5.1 },
            clouds: CloudData { all: 75 },
            dt: 1_717_243_200,
        };

        let current = OpenWeatherMapClient::parse_current(data, UnitSystem::Metric);
        assert_eq!(current.city, "Paris");
        assert_eq!(current.country, "FR");
        assert!((current.feels_like - 11.0).abs() < f64::EPSILON);
        assert_eq!(current.description, "broken clouds");
        assert_eq!(current.icon, "04d");
        assert_eq!(current.cloudiness, 75);
        assert_eq!(current.observed_at.timestamp(), 1_717_243_200);
    }

    #[test]
    fn test_parse_current_feels_like_falls_back_to_temp() {
        let mut main = main_data(3.0);
        main.feels_like = None;
        let data = CurrentWeatherResponse {
            name: "Oslo".to_string(),
            sys: SysData::default(),
            main,
            weather: Vec::new(),
            wind: WindData::default(),
            clouds: CloudData::default(),
            dt: 0,
        };

        let current = OpenWeatherMapClient::parse_current(data, UnitSystem::Metric);
        assert!((current.feels_like - 3.0).abs() < f64::EPSILON);
        assert_eq!(current.icon, "01d");
    }

    #[test]
    fn test_parse_forecast() {
        let data = ForecastResponse {
            list: vec![
                ForecastItem {
                    main: main_data(1.0),
                    weather: vec![ConditionData {
                        description: "snow".to_string(),
                        icon: "13n".to_string(),
                    }],
                    dt_txt: "2024-01-15 21:00:00".to_string(),
                },
                ForecastItem {
                    main: main_data(-1.0),
                    weather: Vec::new(),
                    dt_txt: "2024-01-16 00:00:00".to_string(),
                },
            ],
            city: Some(ForecastCity {
                name: "Helsinki".to_string(),
                country: "FI".to_string(),
            }),
        };

        let forecast = OpenWeatherMapClient::parse_forecast(data, UnitSystem::Metric)
            .expect("should parse");
        assert_eq!(forecast.city.as_deref(), Some("Helsinki"));
        assert_eq!(forecast.entries.len(), 2);
        assert_eq!(
            forecast.entries[0].time.format("%Y-%m-%d %H:%M").to_string(),
            "2024-01-15 21:00"
        );
        assert_eq!(forecast.entries[1].description, "");
    }

    #[test]
    fn test_parse_forecast_time_invalid() {
        assert!(OpenWeatherMapClient::parse_forecast_time("2024-01-15T21:00").is_err());
        assert!(OpenWeatherMapClient::parse_forecast_time("garbage").is_err());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let client = OpenWeatherMapClient::new(WeatherConfig::default())
            .expect("client creation should succeed");
        let result = client.get_current("London", UnitSystem::Metric).await;
        assert!(matches!(result, Err(WeatherError::InvalidApiKey)));
    }

    #[test]
    fn test_client_creation() {
        let _ = client();
    }

    #[test]
    fn test_weather_error_display() {
        assert_eq!(
            WeatherError::CityNotFound("Atlantis".into()).to_string(),
            "City not found: Atlantis"
        );
        assert!(WeatherError::RateLimitExceeded.to_string().contains("Rate limit"));
    }
}
