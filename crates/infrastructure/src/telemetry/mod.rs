//! Logging infrastructure
//!
//! Installs the `tracing` subscriber used by every crate in the workspace.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
