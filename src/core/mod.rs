pub mod distance;
pub mod selection;

pub use crate::domain::model::{Coordinate, Venue};
pub use crate::domain::ports::VenueSource;
pub use crate::utils::error::Result;
