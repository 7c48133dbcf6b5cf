use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use skycast_core::{Config, FallbackSource, WeatherSnapshot, WeatherSource};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key used for live data.
    Configure,

    /// List locations matching a query.
    Search {
        /// Free-text location query, e.g. "lon" or "india".
        query: String,
    },

    /// Show current conditions and the 7-day forecast for a place.
    Show {
        /// Location name; the best search match is used.
        place: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Search { query } => search(&query).await,
            Command::Show { place } => show(&place).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Text::new("WeatherAPI.com API key (empty for offline mode):")
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    config.api_key = if key.is_empty() { None } else { Some(key.to_string()) };
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn search(query: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = FallbackSource::from_config(&config);

    let hits = source.search_locations(query).await?;
    if hits.is_empty() {
        println!("No matching locations.");
        return Ok(());
    }

    for location in &hits {
        println!(
            "{}, {}, {} ({:.2}, {:.2})",
            location.name, location.region, location.country, location.lat, location.lon
        );
    }
    Ok(())
}

async fn show(place: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = FallbackSource::from_config(&config);

    let hits = source.search_locations(place).await?;
    let Some(location) = hits.into_iter().next() else {
        bail!("No location matching '{place}'");
    };

    let snapshot = source.fetch_snapshot(&location).await?;
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &WeatherSnapshot) {
    let location = &snapshot.location;
    let current = &snapshot.current;

    println!("{}, {}, {}", location.name, location.region, location.country);
    println!(
        "  {}, {:.0}C / {:.0}F (feels like {:.0}C / {:.0}F)",
        current.condition.text(),
        current.temp_c,
        current.temp_f,
        current.feelslike_c,
        current.feelslike_f
    );
    println!(
        "  wind {:.0} km/h ({:.0} mph), humidity {}%",
        current.wind_kph, current.wind_mph, current.humidity
    );
    println!();

    for day in &snapshot.forecast {
        println!(
            "  {}  {:<14} {:>3.0}C / {:>3.0}C   sunrise {}, sunset {}",
            day.date,
            day.condition.text(),
            day.maxtemp_c,
            day.mintemp_c,
            day.sunrise,
            day.sunset
        );
    }
}
