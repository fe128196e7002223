//! Nimbus CLI
//!
//! Current weather and daily forecasts for a city, or for the city the
//! caller's IP address resolves to.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod render;
mod session;

use std::{io::Write, process::ExitCode, sync::Arc};

use anyhow::Context;
use application::{ApplicationError, GeoLocationPort, WeatherPort, WeatherService};
use clap::Parser;
use domain::{EMPTY_CITY_MESSAGE, UnitSystem, WeatherReport};
use infrastructure::{
    AppConfig, CachedWeatherAdapter, GeoLocationAdapter, WeatherAdapter, init_logging,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::{
    cli::{Cli, Commands, log_filter_from_verbosity},
    render::Renderer,
    session::{HELP, Input, Session},
};

/// Exit code for a missing API key or other setup problems
const EXIT_CONFIG: u8 = 2;

/// Which part of a report a one-shot command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Full,
    Current,
    Forecast,
}

/// Wire the adapters from configuration
fn build_service(config: &AppConfig) -> anyhow::Result<WeatherService> {
    let weather = WeatherAdapter::with_config(config.weather.to_weather_config())?;
    let weather: Arc<dyn WeatherPort> =
        Arc::new(CachedWeatherAdapter::new(weather, &config.cache));
    let geolocation: Arc<dyn GeoLocationPort> = Arc::new(GeoLocationAdapter::with_config(
        config.geolocation.to_geolocation_config(),
    )?);
    Ok(WeatherService::new(weather, geolocation))
}

fn print_report(
    renderer: &Renderer,
    report: &WeatherReport,
    view: View,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let out = match view {
            View::Full => serde_json::to_string_pretty(report)?,
            View::Current => serde_json::to_string_pretty(&report.current)?,
            View::Forecast => serde_json::to_string_pretty(&report.daily)?,
        };
        println!("{out}");
        return Ok(());
    }

    let out = match view {
        View::Full => renderer.report(report),
        View::Current => renderer.current(&report.current),
        View::Forecast => renderer.daily(&report.daily),
    };
    print!("{out}");
    Ok(())
}

async fn run_city(
    service: &WeatherService,
    renderer: &Renderer,
    city: &str,
    units: UnitSystem,
    view: View,
    json: bool,
) -> anyhow::Result<ExitCode> {
    match service.report_for_city(city, units).await {
        Ok(report) => {
            print_report(renderer, &report, view, json)?;
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            eprintln!("{}", renderer.error(&e));
            Ok(ExitCode::FAILURE)
        },
    }
}

async fn run_here(
    service: &WeatherService,
    renderer: &Renderer,
    units: UnitSystem,
    json: bool,
) -> anyhow::Result<ExitCode> {
    match service.report_for_current_location(units).await {
        Ok(located) if json => {
            println!("{}", serde_json::to_string_pretty(&located)?);
            Ok(ExitCode::SUCCESS)
        },
        Ok(located) => {
            println!("{}\n", renderer.location(&located.location));
            print_report(renderer, &located.report, View::Full, false)?;
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            eprintln!("{}", renderer.error(&e));
            Ok(ExitCode::FAILURE)
        },
    }
}

/// Read commands from stdin until `:quit` or end of input
async fn run_interactive(service: &WeatherService, mut session: Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    println!("{}", Renderer::new(session.theme()).notice(HELP));

    loop {
        print!("\n{}", session.prompt());
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };
        let renderer = Renderer::new(session.theme());

        match Input::parse(&line) {
            Input::Empty => eprintln!("{}", renderer.error(EMPTY_CITY_MESSAGE)),
            Input::City(city) => match service.report_for_city(&city, session.units()).await {
                Ok(report) => {
                    print!("{}", renderer.report(&report));
                    session.remember(report);
                },
                Err(e) => eprintln!("{}", renderer.error(&e)),
            },
            Input::Here => match service.report_for_current_location(session.units()).await {
                Ok(located) => {
                    println!("{}\n", renderer.location(&located.location));
                    print!("{}", renderer.report(&located.report));
                    session.remember(located.report);
                },
                Err(e) => eprintln!("{}", renderer.error(&e)),
            },
            Input::Theme => {
                let theme = session.toggle_theme();
                let renderer = Renderer::new(theme);
                println!("{}", renderer.notice(format!("Theme: {theme}")));
                if let Some(report) = session.last_report() {
                    print!("{}", renderer.report(report));
                }
            },
            Input::Units => {
                let units = session.toggle_units();
                println!("{}", renderer.notice(format!("Units: {units}")));
                if let Some(report) = session.last_report() {
                    print!("{}", renderer.report(report));
                }
            },
            Input::Help => println!("{}", renderer.notice(HELP)),
            Input::Quit => break,
            Input::Unknown(command) => eprintln!(
                "{}",
                renderer.error(format!("Unknown command :{command}. Type :help for a list"))
            ),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    let units = cli.units.unwrap_or(config.ui.units);
    let theme = cli.theme.unwrap_or(config.ui.theme);
    let renderer = Renderer::new(theme);
    info!(units = %units, theme = %theme, "Starting nimbus");

    if !config.weather.has_api_key() {
        let err = ApplicationError::Configuration(
            "no OpenWeatherMap API key. Set OPENWEATHER_API_KEY or weather.api_key in nimbus.toml"
                .into(),
        );
        eprintln!("{}", renderer.error(err));
        return Ok(ExitCode::from(EXIT_CONFIG));
    }

    let service = build_service(&config)?;

    match cli.command {
        Commands::Show { city } => {
            run_city(&service, &renderer, &city, units, View::Full, cli.json).await
        },
        Commands::Current { city } => {
            run_city(&service, &renderer, &city, units, View::Current, cli.json).await
        },
        Commands::Forecast { city } => {
            run_city(&service, &renderer, &city, units, View::Forecast, cli.json).await
        },
        Commands::Here => run_here(&service, &renderer, units, cli.json).await,
        Commands::Interactive => {
            run_interactive(&service, Session::new(theme, units)).await?;
            Ok(ExitCode::SUCCESS)
        },
    }
}
