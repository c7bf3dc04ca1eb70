use clap::{Parser, Subcommand};
use nws_core::{Config, NwsClient, WeatherSource};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nws", version, about = "Weather.gov alerts and forecasts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show active weather alerts for a region.
    Alerts {
        /// Region code, e.g. a two-letter US state code such as "CA".
        region: String,
    },

    /// Show the short-term forecast for a coordinate pair.
    Forecast {
        /// Latitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let client = NwsClient::new(config)?;

        match self.command {
            Command::Alerts { region } => {
                println!("{}", client.get_alerts(&region).await);
            }
            Command::Forecast {
                latitude,
                longitude,
            } => {
                println!("{}", client.get_forecast(latitude, longitude).await);
            }
        }

        Ok(())
    }
}
