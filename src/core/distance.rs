use crate::domain::model::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate surface distance between two points in kilometers, using the
/// equirectangular approximation: the longitude delta is scaled by the cosine
/// of the mean latitude and the result treated as planar. Accurate for short
/// separations; degrades near the poles and for antipodal points.
///
/// Symmetric in its arguments: both deltas are squared, so the subtraction
/// order cannot affect the result.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let delta_latitude = (a.latitude - b.latitude).to_radians();
    let delta_longitude = (a.longitude - b.longitude).to_radians();
    let mean_latitude = ((a.latitude + b.latitude) / 2.0).to_radians();

    EARTH_RADIUS_KM
        * (delta_latitude.powi(2) + (mean_latitude.cos() * delta_longitude).powi(2)).sqrt()
}
