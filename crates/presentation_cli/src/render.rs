//! Themed terminal rendering
//!
//! Every function returns a `String` so callers decide where it goes and
//! tests can inspect it. Styling follows crossterm's `NO_COLOR` handling.

use std::fmt::{self, Display};

use application::DetectedLocation;
use crossterm::style::{Color, Stylize, style};
use domain::{CurrentConditions, DailySummary, ThemeMode, WeatherReport};

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Temperatures and values
    pub primary: Color,
    /// Location header and day temperatures
    pub accent: Color,
    /// Labels, dates and secondary text
    pub muted: Color,
    /// Weather descriptions and info card labels
    pub highlight: Color,
    /// Error banners
    pub error: Color,
}

impl Palette {
    /// Material shades: 900/700 on light backgrounds, 200/300 on dark ones
    pub const fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self {
                primary: Color::Rgb { r: 0x0D, g: 0x47, b: 0xA1 },
                accent: Color::Rgb { r: 0x19, g: 0x76, b: 0xD2 },
                muted: Color::Rgb { r: 0x61, g: 0x61, b: 0x61 },
                highlight: Color::Rgb { r: 0xE6, g: 0x51, b: 0x00 },
                error: Color::Rgb { r: 0xD3, g: 0x2F, b: 0x2F },
            },
            ThemeMode::Dark => Self {
                primary: Color::Rgb { r: 0x90, g: 0xCA, b: 0xF9 },
                accent: Color::Rgb { r: 0x64, g: 0xB5, b: 0xF6 },
                muted: Color::Rgb { r: 0xBD, g: 0xBD, b: 0xBD },
                highlight: Color::Rgb { r: 0xFF, g: 0xB7, b: 0x4D },
                error: Color::Rgb { r: 0xE5, g: 0x73, b: 0x73 },
            },
        }
    }
}

/// Renders reports with the palette of the active theme
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub const fn new(theme: ThemeMode) -> Self {
        Self {
            palette: Palette::for_theme(theme),
        }
    }

    /// Current conditions followed by the day cards
    pub fn report(&self, report: &WeatherReport) -> String {
        let mut out = self.current(&report.current);
        out.push('\n');
        out.push_str(&self.daily(&report.daily));
        out
    }

    /// Location header, description, temperature and the four info cards
    pub fn current(&self, current: &CurrentConditions) -> String {
        CurrentView {
            palette: &self.palette,
            current,
        }
        .to_string()
    }

    /// One line per forecast day: date, average temperature, description
    pub fn daily(&self, days: &[DailySummary]) -> String {
        DailyView {
            palette: &self.palette,
            days,
        }
        .to_string()
    }

    /// Where the IP lookup placed the caller, with coordinates when known
    pub fn location(&self, location: &DetectedLocation) -> String {
        let mut parts = vec![location.city.as_str().to_string()];
        parts.extend(location.region.iter().cloned());
        parts.extend(location.country.iter().cloned());
        // Region often repeats the city name
        parts.dedup();

        let mut place = parts.join(", ");
        if let Some(coordinates) = location.coordinates {
            place = format!("{place} ({coordinates})");
        }

        format!(
            "📍 {} {}",
            style("Detected location:").with(self.palette.muted),
            style(place).with(self.palette.accent)
        )
    }

    pub fn error(&self, message: impl Display) -> String {
        style(format!("❌ {message}")).with(self.palette.error).to_string()
    }

    pub fn notice(&self, message: impl Display) -> String {
        style(message).with(self.palette.muted).to_string()
    }
}

struct CurrentView<'a> {
    palette: &'a Palette,
    current: &'a CurrentConditions,
}

impl CurrentView<'_> {
    fn info_card(
        &self,
        f: &mut fmt::Formatter<'_>,
        icon: &str,
        label: &str,
        value: impl Display,
    ) -> fmt::Result {
        writeln!(
            f,
            "  {icon} {}  {}",
            style(format!("{label:<11}")).with(self.palette.highlight),
            style(value).with(self.palette.primary).bold(),
        )
    }
}

impl Display for CurrentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.palette;
        let current = self.current;

        writeln!(f, "{}", style(current.location_label()).with(p.accent).bold())?;
        writeln!(
            f,
            "{}  {}",
            style(current.display_description()).with(p.muted).italic(),
            style(current.icon_url()).with(p.muted).dim(),
        )?;
        writeln!(f, "{}", style(current.temperature).with(p.primary).bold())?;
        writeln!(
            f,
            "{}\n",
            style(format!("Feels like {}", current.feels_like)).with(p.muted)
        )?;

        self.info_card(f, "💧", "Humidity", format!("{}%", current.humidity))?;
        self.info_card(
            f,
            "🌬️",
            "Wind Speed",
            format!(
                "{:.1} {}",
                current.wind_speed,
                current.units.wind_speed_label()
            ),
        )?;
        self.info_card(f, "🧭", "Pressure", format!("{} hPa", current.pressure))?;
        self.info_card(f, "☁️", "Cloudiness", format!("{}%", current.cloudiness))
    }
}

struct DailyView<'a> {
    palette: &'a Palette,
    days: &'a [DailySummary],
}

impl Display for DailyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.palette;

        writeln!(f, "{}", style("Forecast").with(p.accent).bold())?;
        if self.days.is_empty() {
            return writeln!(f, "  {}", style("No forecast data").with(p.muted));
        }

        for day in self.days {
            writeln!(
                f,
                "  {}  {}  {}",
                style(day.date.format("%a %Y-%m-%d")).with(p.muted),
                style(format!("{:>8}", day.average_temperature.to_string()))
                    .with(p.accent)
                    .bold(),
                style(&day.description).with(p.highlight),
            )?;
        }
        Ok(())
    }
}
