use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::Text;
use tracing::debug;

use skycast_core::{Config, FetchError, ForecastProvider, ForecastRequest, VisualCrossingProvider};

use crate::report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Hourly forecasts and night-sky info in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather API key in the config file.
    Configure,

    /// Show the hourly forecast for a town.
    Forecast {
        /// Town or location name; prompted for when absent.
        town: Option<String>,

        /// Date in DD-MM-YYYY form; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Forecast { town, date }) => forecast(town, date).await,
            // Bare invocation: the fully interactive flow.
            None => forecast(None, None).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("Weather API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn forecast(town: Option<String>, date: Option<String>) -> Result<()> {
    let town = match town {
        Some(town) => town,
        None => Text::new("Town:").prompt().context("Failed to read town name")?,
    };

    let date = match date {
        Some(raw) => parse_input_date(&raw)?,
        None => prompt_date()?,
    };

    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    let provider = VisualCrossingProvider::new(api_key)?;

    let request = ForecastRequest { location: town, date };
    debug!(location = %request.location, date = %request.date, "submitting forecast request");

    match provider.fetch_day(&request).await {
        Ok(day) => print!("{}", report::render(&request.location, request.date, &day)),
        Err(FetchError::Status(status)) => {
            println!("Unexpected status code: {}", status.as_u16());
            println!("No weather data found for this date or format error.");
        }
        Err(err) if err.is_no_data() => {
            println!("No weather data found for this date or format error.");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn prompt_date() -> Result<NaiveDate> {
    let raw = Text::new("Date in DD-MM-YYYY format (leave blank for today):")
        .prompt()
        .context("Failed to read date")?;

    parse_input_date(&raw)
}

/// Blank means "today"; anything else must match DD-MM-YYYY exactly.
fn parse_input_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Local::now().date_naive());
    }

    NaiveDate::parse_from_str(trimmed, "%d-%m-%Y")
        .with_context(|| format!("Invalid date '{trimmed}', expected DD-MM-YYYY"))
}
