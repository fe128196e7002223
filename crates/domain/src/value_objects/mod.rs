//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod geo_location;
mod temperature;
mod theme_mode;
mod unit_system;

pub use city_name::{CityName, EMPTY_CITY_MESSAGE};
pub use geo_location::GeoLocation;
pub use temperature::{Temperature, TemperatureUnit};
pub use theme_mode::ThemeMode;
pub use unit_system::UnitSystem;
