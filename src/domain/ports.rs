use crate::domain::model::Venue;
use crate::utils::error::Result;

/// Anything that can materialize the full venue collection.
/// The core only ever sees the already-loaded records.
pub trait VenueSource {
    fn load(&self) -> Result<Vec<Venue>>;
}
