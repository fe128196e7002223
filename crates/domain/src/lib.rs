//! Domain layer for Nimbus
//!
//! Contains the weather vocabulary shared by every other crate: value objects,
//! entities and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
