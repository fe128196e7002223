//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod cached_weather_adapter;
mod geolocation_adapter;
mod weather_adapter;

pub use cached_weather_adapter::CachedWeatherAdapter;
pub use geolocation_adapter::GeoLocationAdapter;
pub use weather_adapter::WeatherAdapter;
