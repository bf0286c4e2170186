pub mod brute_force;

// Common algorithm traits
use crate::error::SolverResult;
use crate::models::{CityId, Distance, DistanceMatrix, TourSolution, TspInstance};

/// Trait for closed-tour solvers
pub trait TourSolver {
    /// Find the best tour through every city of the instance
    fn solve(&self, instance: &TspInstance) -> SolverResult<TourSolution>;

    /// Calculate the closed-tour cost of visiting `permutation` from `start_city`
    fn tour_cost(
        &self,
        start_city: CityId,
        matrix: &DistanceMatrix,
        permutation: &[CityId],
    ) -> Distance;
}
