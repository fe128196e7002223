//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityName, CurrentConditions, ForecastSample, Temperature, UnitSystem};
use integration_weather::{
    CurrentWeather, Forecast, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::CityNotFound(city) => ApplicationError::CityNotFound(city),
            WeatherError::InvalidApiKey => {
                ApplicationError::NotAuthorized("OpenWeatherMap rejected the API key".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert integration current weather to domain current conditions
    fn map_current(current: CurrentWeather) -> CurrentConditions {
        let unit = current.units.temperature_unit();
        CurrentConditions {
            city: current.city,
            country: current.country,
            temperature: Temperature::new(current.temperature, unit),
            feels_like: Temperature::new(current.feels_like, unit),
            humidity: current.humidity,
            description: current.description,
            icon: current.icon,
            wind_speed: current.wind_speed,
            pressure: current.pressure,
            cloudiness: current.cloudiness,
            observed_at: current.observed_at,
            units: current.units,
        }
    }

    /// Convert an integration forecast to domain samples, keeping provider order
    fn map_forecast(forecast: Forecast) -> Vec<ForecastSample> {
        forecast
            .entries
            .into_iter()
            .map(|e| ForecastSample::new(e.time, e.temperature, e.description))
            .collect()
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city, units = units.as_str()))]
    async fn get_current_conditions(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self
            .client
            .get_current(city.as_str(), units)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    description = %current.description,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_current)
    }

    #[instrument(skip(self), fields(city = %city, units = units.as_str()))]
    async fn get_forecast_samples(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.as_str(), units)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(entries = forecast.entries.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map(Self::map_forecast)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
