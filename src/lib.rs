// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::brute_force::ExhaustiveSolver;
pub use algorithms::TourSolver;
pub use config::{SearchMode, SolverConfig};
pub use error::{SolverError, SolverResult};
pub use models::{DistanceMatrix, Location, Tour, TourSolution, TspInstance};
