//! Application layer - Use cases and orchestration
//!
//! Defines the ports the weather lookup depends on and the services that
//! combine them into a complete report.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
