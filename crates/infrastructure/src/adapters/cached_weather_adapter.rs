//! Cached weather adapter - Decorator that adds caching to any `WeatherPort`
//!
//! Repeated lookups of the same city within the TTL are served from an
//! in-memory Moka cache instead of hitting the provider again.

use std::time::Duration;

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{CityName, CurrentConditions, ForecastSample, UnitSystem};
use moka::future::Cache;
use tracing::{debug, instrument};

use crate::config::CacheConfig;

/// Caching decorator for weather ports
///
/// Current conditions and forecast samples live in separate caches, both
/// keyed by the lower-cased city name and the unit system.
pub struct CachedWeatherAdapter<W: WeatherPort> {
    /// The underlying weather implementation
    inner: W,
    current: Cache<String, CurrentConditions>,
    forecast: Cache<String, Vec<ForecastSample>>,
    /// Whether caching is enabled
    enabled: bool,
}

impl<W: WeatherPort + std::fmt::Debug> std::fmt::Debug for CachedWeatherAdapter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedWeatherAdapter")
            .field("inner", &self.inner)
            .field("current_entries", &self.current.entry_count())
            .field("forecast_entries", &self.forecast.entry_count())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl<W: WeatherPort> CachedWeatherAdapter<W> {
    /// Wrap `inner` using the TTL and capacity from `config`
    pub fn new(inner: W, config: &CacheConfig) -> Self {
        let ttl = Duration::from_secs(config.ttl_secs);
        Self {
            inner,
            current: Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(ttl)
                .build(),
            forecast: Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(ttl)
                .build(),
            enabled: config.enabled,
        }
    }

    /// Disable caching (useful for debugging)
    #[must_use]
    pub const fn with_caching_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Drop every cached entry
    pub fn invalidate_all(&self) {
        self.current.invalidate_all();
        self.forecast.invalidate_all();
    }

    /// Get the underlying weather adapter
    pub const fn inner(&self) -> &W {
        &self.inner
    }

    fn cache_key(city: &CityName, units: UnitSystem) -> String {
        format!("{}:{}", city.cache_key(), units.as_str())
    }
}

#[async_trait]
impl<W: WeatherPort> WeatherPort for CachedWeatherAdapter<W> {
    #[instrument(skip(self), fields(city = %city, cached = tracing::field::Empty))]
    async fn get_current_conditions(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError> {
        if !self.enabled {
            return self.inner.get_current_conditions(city, units).await;
        }

        let key = Self::cache_key(city, units);
        if let Some(hit) = self.current.get(&key).await {
            tracing::Span::current().record("cached", true);
            debug!(key = %key, "Cache hit for current conditions");
            return Ok(hit);
        }
        tracing::Span::current().record("cached", false);

        // Errors are never cached
        let conditions = self.inner.get_current_conditions(city, units).await?;
        self.current.insert(key, conditions.clone()).await;
        Ok(conditions)
    }

    #[instrument(skip(self), fields(city = %city, cached = tracing::field::Empty))]
    async fn get_forecast_samples(
        &self,
        city: &CityName,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        if !self.enabled {
            return self.inner.get_forecast_samples(city, units).await;
        }

        let key = Self::cache_key(city, units);
        if let Some(hit) = self.forecast.get(&key).await {
            tracing::Span::current().record("cached", true);
            debug!(key = %key, samples = hit.len(), "Cache hit for forecast");
            return Ok(hit);
        }
        tracing::Span::current().record("cached", false);

        let samples = self.inner.get_forecast_samples(city, units).await?;
        self.forecast.insert(key, samples.clone()).await;
        Ok(samples)
    }

    async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}
