//! Application services - Use case implementations

pub mod forecast_aggregator;
mod weather_service;

pub use forecast_aggregator::{aggregate_daily, group_by_date, most_frequent_description};
pub use weather_service::{LocatedReport, WeatherService};
