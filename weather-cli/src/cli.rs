use std::{io, path::PathBuf};

use clap::{ArgAction, Parser};
use weather_core::{
    Credentials, OpenWeatherClient, Units, WeatherRequest, config::API_KEY_ENV,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Gets weather and temperature information for a city"
)]
pub struct Cli {
    /// City name; several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Display the weather in imperial units.
    #[arg(short, long)]
    pub imperial: bool,

    /// Two-letter code of the language descriptions are shown in.
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Credentials file; defaults to ./secrets.toml, then the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> WeatherRequest {
        WeatherRequest::new(
            self.city.as_slice(),
            self.language.clone(),
            Units::from_imperial(self.imperial),
        )
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let credentials =
            Credentials::resolve(self.config.as_deref(), std::env::var(API_KEY_ENV).ok())?;
        let request = self.request();
        tracing::info!(city = %request.city, units = %request.units, "looking up current weather");

        let client = OpenWeatherClient::new();
        let mut stdout = io::stdout().lock();
        weather_core::report(&client, &request, &credentials, &mut stdout).await?;

        Ok(())
    }
}
