use crate::domain::model::Coordinate;
use crate::utils::error::{GeoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_latitude(value: f64) -> Result<()> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
        return Err(GeoError::InvalidCoordinateError {
            component: "latitude".to_string(),
            value,
            expected: "a value in [-90, 90]".to_string(),
        });
    }
    Ok(())
}

/// The lower bound is exclusive: -180 is rejected, 180 is accepted.
/// Both refer to the same meridian; the dataset convention keeps only
/// the positive spelling.
pub fn validate_longitude(value: f64) -> Result<()> {
    if !value.is_finite() || value <= -180.0 || value > 180.0 {
        return Err(GeoError::InvalidCoordinateError {
            component: "longitude".to_string(),
            value,
            expected: "a value in (-180, 180]".to_string(),
        });
    }
    Ok(())
}

impl Validate for Coordinate {
    fn validate(&self) -> Result<()> {
        validate_latitude(self.latitude)?;
        validate_longitude(self.longitude)?;
        Ok(())
    }
}
