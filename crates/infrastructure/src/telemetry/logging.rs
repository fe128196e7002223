//! Log subscriber initialization and configuration
//!
//! Output always goes to stderr so that rendered reports and `--json`
//! output on stdout stay machine-readable.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "integration_weather=trace,info")
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Pick the filter directive: the command-line override, then `RUST_LOG`,
/// then the configured filter
///
/// An unparsable `RUST_LOG` is ignored. An unparsable override or configured
/// filter is an error.
fn build_filter(
    config: &LoggingConfig,
    override_filter: Option<&str>,
    rust_log: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    let parse = |filter: &str| {
        EnvFilter::try_new(filter).map_err(|e| TelemetryError::Filter {
            filter: filter.to_string(),
            reason: e.to_string(),
        })
    };

    if let Some(filter) = override_filter {
        return parse(filter);
    }
    if let Some(filter) = rust_log.and_then(|f| EnvFilter::try_new(f).ok()) {
        return Ok(filter);
    }
    parse(&config.filter)
}

/// Install the global tracing subscriber
///
/// `override_filter` (from `-v` flags) beats both `RUST_LOG` and the
/// configured filter. Can only succeed once per process; later calls return
/// `TelemetryError::Init`.
///
/// # Example
///
/// ```ignore
/// use infrastructure::telemetry::{LoggingConfig, init_logging};
///
/// init_logging(&LoggingConfig::default(), Some("debug"))?;
/// ```
pub fn init_logging(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(config, override_filter, rust_log.as_deref())?;
    let effective = env_filter.to_string();

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %effective, format = %config.format, "Logging initialized");
    Ok(())
}
