// Models module - exports all model types

mod distance_matrix;
mod instance;
mod location;
mod solution;
mod tour;

// Re-export model types
pub use self::distance_matrix::DistanceMatrix;
pub use self::instance::{
    validate_city_count, validate_start_city, TspInstance, MAX_CITIES, MIN_CITIES,
};
pub use self::location::{City, Location};
pub use self::solution::TourSolution;
pub use self::tour::{Tour, TourCandidate};

// Common type aliases for improved code readability
pub type CityId = usize;
pub type Distance = f64;
