//! Interactive session state and input parsing

use domain::{ThemeMode, UnitSystem, WeatherReport};

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Look up a city
    City(String),
    /// Blank line
    Empty,
    /// Use IP geolocation
    Here,
    /// Toggle light/dark
    Theme,
    /// Toggle metric/imperial
    Units,
    Help,
    Quit,
    /// Unrecognized `:command`
    Unknown(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Self::City(line.to_string());
        };
        match command.trim().to_lowercase().as_str() {
            "here" | "h" => Self::Here,
            "theme" | "t" => Self::Theme,
            "units" | "u" => Self::Units,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a city name to see its weather, or:
  :here   detect your city from your IP address
  :theme  switch between light and dark
  :units  switch between metric and imperial
  :help   show this help
  :quit   leave";

/// What the interactive loop remembers between lines
#[derive(Debug, Clone)]
pub struct Session {
    theme: ThemeMode,
    units: UnitSystem,
    last_report: Option<WeatherReport>,
}

impl Session {
    pub const fn new(theme: ThemeMode, units: UnitSystem) -> Self {
        Self {
            theme,
            units,
            last_report: None,
        }
    }

    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub const fn units(&self) -> UnitSystem {
        self.units
    }

    pub const fn last_report(&self) -> Option<&WeatherReport> {
        self.last_report.as_ref()
    }

    /// Keep a freshly fetched report for later unit toggles
    pub fn remember(&mut self, report: WeatherReport) {
        self.last_report = Some(report);
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Switch units and convert the last report in place, without a refetch
    pub fn toggle_units(&mut self) -> UnitSystem {
        self.units = self.units.toggled();
        if let Some(report) = self.last_report.take() {
            self.last_report = Some(report.convert_to(self.units));
        }
        self.units
    }

    /// Prompt text, including the hint for the theme toggle
    pub fn prompt(&self) -> String {
        format!(
            "[{} | :theme {}] city> ",
            self.units.temperature_unit().symbol(),
            self.theme.toggle_hint()
        )
    }
}
