//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the OpenWeatherMap and
//! ipapi.co clients, and owns configuration loading and log setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, CacheConfig, GeolocationAppConfig, UiConfig, WeatherAppConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
