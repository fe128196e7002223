//! IP geolocation integration
//!
//! Client for ipapi.co (<https://ipapi.co/api/>). Resolves an approximate
//! city for the public address the request originates from.

pub mod client;
mod models;

pub use client::{GeolocationClient, GeolocationConfig, GeolocationError, IpApiClient};
pub use models::IpLocation;
