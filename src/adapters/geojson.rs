use crate::domain::model::Venue;
use crate::domain::ports::VenueSource;
use crate::utils::error::{GeoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    // GeoJSON order: [longitude, latitude]
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(rename = "Attributes")]
    attributes: Attributes,
}

#[derive(Debug, Deserialize)]
struct Attributes {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "SeatsCount")]
    seats: u32,
}

impl From<Feature> for Venue {
    fn from(feature: Feature) -> Self {
        let [longitude, latitude] = feature.geometry.coordinates;
        Venue::new(
            feature.properties.attributes.name,
            feature.properties.attributes.seats,
            longitude,
            latitude,
        )
    }
}

/// A GeoJSON feature collection on disk. Each feature carries the venue name
/// and seat count under `properties.Attributes` and its location under
/// `geometry.coordinates`.
#[derive(Debug, Clone)]
pub struct GeoJsonFile {
    path: PathBuf,
}

impl GeoJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VenueSource for GeoJsonFile {
    fn load(&self) -> Result<Vec<Venue>> {
        let contents = fs::read_to_string(&self.path)?;
        parse_feature_collection(&contents)
    }
}

fn parse_feature_collection(contents: &str) -> Result<Vec<Venue>> {
    // Report a missing `features` field by name; every other shape problem
    // surfaces as a serde_json error.
    let document: serde_json::Value = serde_json::from_str(contents)?;
    if document.get("features").is_none() {
        return Err(GeoError::MissingFieldError {
            field: "features".to_string(),
        });
    }

    let collection: FeatureCollection = serde_json::from_value(document)?;
    Ok(collection.features.into_iter().map(Venue::from).collect())
}
