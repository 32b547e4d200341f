use crate::utils::error::Result;
use crate::utils::validation::{validate_latitude, validate_longitude, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "venue-scout")]
#[command(about = "Find the biggest, smallest and closest venue in a GeoJSON dataset")]
pub struct CliConfig {
    /// Path to the GeoJSON feature collection.
    #[arg(default_value = "bars.json")]
    pub data_file: PathBuf,

    /// Query point latitude in degrees; prompted for when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Query point longitude in degrees; prompted for when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(latitude) = self.latitude {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = self.longitude {
            validate_longitude(longitude)?;
        }
        Ok(())
    }
}
