//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::{ThemeMode, UnitSystem};

/// Nimbus CLI
#[derive(Debug, Parser)]
#[command(name = "nimbus")]
#[command(author, version, about = "Current weather and five-day forecasts in your terminal", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Unit system (metric or imperial); overrides the configured default
    #[arg(short, long, global = true)]
    pub units: Option<UnitSystem>,

    /// Color theme (light or dark); overrides the configured default
    #[arg(short, long, global = true)]
    pub theme: Option<ThemeMode>,

    /// Print results as JSON instead of styled text
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./nimbus.toml if present)
    #[arg(short, long, global = true, env = "NIMBUS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show current conditions and the daily forecast for a city
    Show {
        /// City name, e.g. "London" or "New York"
        city: String,
    },

    /// Show current conditions only
    Current {
        /// City name
        city: String,
    },

    /// Show the daily forecast only
    Forecast {
        /// City name
        city: String,
    },

    /// Detect your city from your IP address and show its weather
    Here,

    /// Start an interactive session
    ///
    /// Type a city name to look it up, or one of :here, :theme, :units,
    /// :help and :quit.
    Interactive,
}

/// Determine log filter level from verbosity count
///
/// Returns `None` at zero so the configured filter applies.
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
