use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use venue_scout::utils::validation::{validate_latitude, validate_longitude, Validate};
use venue_scout::utils::{error::GeoError, logger};
use venue_scout::{
    biggest_venue, closest_venue, smallest_venue, CliConfig, Coordinate, GeoJsonFile, VenueSource,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting venue-scout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let source = GeoJsonFile::new(config.data_file.clone());
    let venues = source
        .load()
        .with_context(|| format!("failed to load venues from {}", config.data_file.display()))?;
    tracing::info!(
        "Loaded {} venues from {}",
        venues.len(),
        config.data_file.display()
    );

    println!("Biggest:");
    println!("{}", biggest_venue(&venues)?);

    println!("Smallest:");
    println!("{}", smallest_venue(&venues)?);

    let query = query_point(config)?;
    println!("Closest:");
    println!("{}", closest_venue(&venues, query)?);

    Ok(())
}

/// Latitude first, then longitude; each value is range-checked as soon as it
/// is known, so a bad latitude fails before the longitude prompt.
fn query_point(config: &CliConfig) -> anyhow::Result<Coordinate> {
    let latitude = match config.latitude {
        Some(value) => value,
        None => prompt_number("Your latitude: ")?,
    };
    validate_latitude(latitude)?;

    let longitude = match config.longitude {
        Some(value) => value,
        None => prompt_number("Your longitude: ")?,
    };
    validate_longitude(longitude)?;

    Ok(Coordinate::new(longitude, latitude))
}

fn prompt_number(prompt: &str) -> anyhow::Result<f64> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    let value = line
        .trim()
        .parse::<f64>()
        .map_err(|_| GeoError::InputError {
            message: format!("'{}' is not a decimal number", line.trim()),
        })?;
    Ok(value)
}
