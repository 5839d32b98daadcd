//! Command implementations for the IPMA CLI.
//!
//! Each subcommand drives a [`ViewController`](ipma_controller::ViewController)
//! through the same transitions a dashboard user would make, then prints
//! the resulting view.

use clap::Subcommand;
use ipma_client::{ClientConfig, HttpQueryService};
use ipma_controller::ViewController;
use ipma_types::{AgriculturalType, Region};

pub mod render;
pub mod session;

#[derive(Subcommand)]
pub enum Command {
    /// Check whether the API is up
    Health,

    /// Show the dashboard overview
    Dashboard,

    /// Fetch the forecast for a location
    Forecast {
        /// District, e.g. `lisboa`
        #[arg(short, long)]
        district: String,

        /// Location within the district, e.g. `sintra`
        #[arg(short, long)]
        location: String,

        /// Day to forecast (YYYY-MM-DD), today up to five days ahead
        #[arg(long)]
        date: Option<String>,
    },

    /// List active weather warnings
    Warnings {
        /// Only show warnings of this level (verde, amarelo, laranja, vermelho)
        #[arg(long)]
        level: Option<String>,
    },

    /// Show recent seismic events
    Seismic {
        /// continente, acores or madeira
        #[arg(short, long, default_value = "continente")]
        region: Region,
    },

    /// Show fire risk, UV index and sea state
    Marine,

    /// Show weather stations and their latest observations
    Stations,

    /// Show an agricultural series and shellfish water quality
    Agriculture {
        /// precipitation, evapotranspiration, temperature_min, temperature_max or pdsi
        #[arg(short, long, default_value = "precipitation")]
        kind: AgriculturalType,
    },
}

pub async fn run(command: Command, config: &ClientConfig) -> anyhow::Result<()> {
    log::info!("[IPMA] using API at {}", config.base_url);
    let service = HttpQueryService::new(config)?;
    let controller = ViewController::new(service);
    match command {
        Command::Health => session::run_health(&controller).await,
        Command::Dashboard => session::run_dashboard(&controller).await,
        Command::Forecast {
            district,
            location,
            date,
        } => session::run_forecast(&controller, &district, &location, date.as_deref()).await,
        Command::Warnings { level } => session::run_warnings(&controller, level.as_deref()).await,
        Command::Seismic { region } => session::run_seismic(&controller, region).await,
        Command::Marine => session::run_marine(&controller).await,
        Command::Stations => session::run_stations(&controller).await,
        Command::Agriculture { kind } => session::run_agriculture(&controller, kind).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_seismic_region() {
        let cli = Cli::try_parse_from(["ipma", "seismic", "--region", "acores"]).unwrap();
        assert!(matches!(cli.command, Command::Seismic { region: Region::Acores }));

        let cli = Cli::try_parse_from(["ipma", "seismic"]).unwrap();
        assert!(matches!(cli.command, Command::Seismic { region: Region::Continente }));

        assert!(Cli::try_parse_from(["ipma", "seismic", "--region", "atlantis"]).is_err());
    }

    #[test]
    fn test_parse_agriculture_kind_accepts_dashes() {
        let cli = Cli::try_parse_from(["ipma", "agriculture", "--kind", "temperature-max"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Agriculture {
                kind: AgriculturalType::TemperatureMax
            }
        ));
    }

    #[test]
    fn test_parse_forecast_requires_district_and_location() {
        assert!(Cli::try_parse_from(["ipma", "forecast", "--district", "lisboa"]).is_err());
        let cli = Cli::try_parse_from([
            "ipma", "forecast", "-d", "lisboa", "-l", "sintra", "--date", "2024-06-03",
        ])
        .unwrap();
        match cli.command {
            Command::Forecast { date, .. } => assert_eq!(date.as_deref(), Some("2024-06-03")),
            _ => panic!("expected forecast"),
        }
    }
}
