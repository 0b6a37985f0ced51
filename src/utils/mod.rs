// Shared helpers

pub mod clock;
pub mod geo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use geo::{distance_between_coordinates, EARTH_RADIUS_KM};
