//! Weather service port
//!
//! Defines the interface for weather data retrieval by city name.

use async_trait::async_trait;
use domain::{CityName, CurrentConditions, ForecastSample, UnitSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city
    async fn get_current_conditions(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw multi-day forecast for a city, in timestamp order
    async fn get_forecast_samples(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Check if the weather provider is reachable
    async fn is_available(&self) -> bool;
}
