//! A single forecast data point

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One 3-hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Local timestamp of the sample
    pub timestamp: NaiveDateTime,
    /// Temperature in the unit the forecast was requested in
    pub temperature: f64,
    /// Provider description, e.g. "scattered clouds"
    pub description: String,
}

impl ForecastSample {
    pub fn new(timestamp: NaiveDateTime, temperature: f64, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            temperature,
            description: description.into(),
        }
    }

    /// Calendar date the sample falls on
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
