use crate::core::distance::distance_km;
use crate::domain::model::{Coordinate, Venue};
use crate::utils::error::{GeoError, Result};

/// Single forward scan keeping the current best. `better` must be a strict
/// comparison so that the first record wins ties.
fn select_by<'a, F>(venues: &'a [Venue], better: F) -> Result<&'a Venue>
where
    F: Fn(&Venue, &Venue) -> bool,
{
    let mut iter = venues.iter();
    let first = iter.next().ok_or(GeoError::EmptyInputError)?;
    Ok(iter.fold(first, |best, venue| {
        if better(venue, best) {
            venue
        } else {
            best
        }
    }))
}

/// The venue with the most seats; the first one in sequence order on ties.
pub fn biggest_venue(venues: &[Venue]) -> Result<&Venue> {
    select_by(venues, |candidate, best| candidate.seats > best.seats)
}

/// The venue with the fewest seats; the first one in sequence order on ties.
pub fn smallest_venue(venues: &[Venue]) -> Result<&Venue> {
    select_by(venues, |candidate, best| candidate.seats < best.seats)
}

/// The venue closest to `query`; the first minimal one in sequence order on
/// ties. Distances are computed with the equirectangular approximation.
pub fn closest_venue<'a>(venues: &'a [Venue], query: Coordinate) -> Result<&'a Venue> {
    let mut iter = venues.iter();
    let first = iter.next().ok_or(GeoError::EmptyInputError)?;

    let mut best = first;
    let mut best_distance = distance_km(query, first.location);
    for venue in iter {
        let candidate_distance = distance_km(query, venue.location);
        if candidate_distance < best_distance {
            best = venue;
            best_distance = candidate_distance;
        }
    }
    Ok(best)
}
