//! Weather service - builds complete reports for a city or the caller's location

use std::{fmt, sync::Arc};

use domain::{CityName, UnitSystem, WeatherReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DetectedLocation, GeoLocationPort, WeatherPort},
    services::forecast_aggregator::aggregate_daily,
};

/// A report together with the location it was resolved from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedReport {
    pub location: DetectedLocation,
    pub report: WeatherReport,
}

/// Orchestrates weather and geolocation lookups
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    geolocation: Arc<dyn GeoLocationPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(weather: Arc<dyn WeatherPort>, geolocation: Arc<dyn GeoLocationPort>) -> Self {
        Self {
            weather,
            geolocation,
        }
    }

    /// Build a report from raw user input
    ///
    /// Blank input fails with the "Please enter a city name" validation error
    /// before any request is made.
    #[instrument(skip(self))]
    pub async fn report_for_city(
        &self,
        raw_city: &str,
        units: UnitSystem,
    ) -> Result<WeatherReport, ApplicationError> {
        let city = CityName::new(raw_city)?;
        self.report(&city, units).await
    }

    /// Fetch current conditions and the forecast, then aggregate by day
    #[instrument(skip(self), fields(city = %city))]
    pub async fn report(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<WeatherReport, ApplicationError> {
        let (current, samples) = tokio::try_join!(
            self.weather.get_current_conditions(city, units),
            self.weather.get_forecast_samples(city, units),
        )?;

        debug!(samples = samples.len(), "Aggregating forecast");
        let daily = aggregate_daily(&samples, units.temperature_unit());

        info!(days = daily.len(), "Weather report ready");
        Ok(WeatherReport {
            current,
            daily,
            units,
        })
    }

    /// Resolve the caller's city from their IP address
    #[instrument(skip(self))]
    pub async fn detect_location(&self) -> Result<DetectedLocation, ApplicationError> {
        match self.geolocation.detect_location().await {
            Ok(location) => {
                debug!(city = %location.city, "Detected location");
                Ok(location)
            },
            Err(ApplicationError::LocationUnavailable(reason)) => {
                warn!(reason = %reason, "Location lookup failed");
                Err(ApplicationError::LocationUnavailable(reason))
            },
            Err(e) => {
                warn!(error = %e, "Location lookup failed");
                Err(ApplicationError::LocationUnavailable(e.to_string()))
            },
        }
    }

    /// Detect the caller's city, then build its report
    #[instrument(skip(self))]
    pub async fn report_for_current_location(
        &self,
        units: UnitSystem,
    ) -> Result<LocatedReport, ApplicationError> {
        let location = self.detect_location().await?;
        let report = self.report(&location.city, units).await?;
        Ok(LocatedReport { location, report })
    }

    /// Check whether the weather provider is reachable
    pub async fn is_weather_available(&self) -> bool {
        self.weather.is_available().await
    }
}
