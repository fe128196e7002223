//! Domain entities

mod current_conditions;
mod daily_summary;
mod forecast_sample;
mod weather_report;

pub use current_conditions::{CurrentConditions, DEFAULT_ICON, title_case};
pub use daily_summary::DailySummary;
pub use forecast_sample::ForecastSample;
pub use weather_report::WeatherReport;
