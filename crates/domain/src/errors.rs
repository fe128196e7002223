//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name is empty or malformed
    #[error("{0}")]
    InvalidCityName(String),

    /// Coordinates outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Unknown unit system name
    #[error("Invalid unit system: {0}. Use 'metric' or 'imperial'")]
    InvalidUnitSystem(String),

    /// Unknown theme name
    #[error("Invalid theme: {0}. Use 'light' or 'dark'")]
    InvalidTheme(String),
}

impl DomainError {
    /// Create an invalid city name error
    pub fn invalid_city(reason: impl Into<String>) -> Self {
        Self::InvalidCityName(reason.into())
    }
}
