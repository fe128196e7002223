//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (e.g. blank city name)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Credentials were rejected by the provider
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The caller's location could not be resolved
    #[error("Could not detect your location: {0}")]
    LocationUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::invalid_city("Please enter a city name").into();
        assert_eq!(err.to_string(), "Please enter a city name");
    }

    #[test]
    fn location_message_prefix() {
        let err = ApplicationError::LocationUnavailable("timeout".into());
        assert!(err.to_string().starts_with("Could not detect your location"));
    }

    #[test]
    fn retryable_classification() {
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(ApplicationError::ExternalService("503".into()).is_retryable());
        assert!(!ApplicationError::CityNotFound("Atlantis".into()).is_retryable());
        assert!(!ApplicationError::NotAuthorized("bad key".into()).is_retryable());
    }
}
