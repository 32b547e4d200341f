pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::geojson::GeoJsonFile;
pub use crate::config::CliConfig;
pub use crate::core::distance::distance_km;
pub use crate::core::selection::{biggest_venue, closest_venue, smallest_venue};
pub use crate::domain::model::{Coordinate, Venue};
pub use crate::domain::ports::VenueSource;
pub use crate::utils::error::{GeoError, Result};
