// Solver output handed to renderers and other consumers

use crate::config::SearchMode;
use crate::models::{CityId, Distance, DistanceMatrix, Location, Tour};
use serde::{Deserialize, Serialize};

/// The full payload of one solver run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    /// N+1 city indices starting and ending at the start city
    pub visiting_order: Vec<CityId>,

    /// The N `(x, y)` pairs exactly as generated
    pub coordinates: Vec<(f64, f64)>,

    /// Rounded pairwise distances, one row per city
    pub distance_matrix: Vec<Vec<Distance>>,

    /// Rounded total of the best tour
    pub total_distance: Distance,

    /// How many permutations were evaluated
    pub permutations_evaluated: u64,

    /// Whether the search was exhaustive or truncated
    pub mode: SearchMode,
}

impl TourSolution {
    pub fn new(
        tour: Tour,
        locations: &[Location],
        matrix: &DistanceMatrix,
        permutations_evaluated: u64,
        mode: SearchMode,
    ) -> Self {
        Self {
            visiting_order: tour.visiting_order,
            coordinates: locations.iter().map(|l| (l.x, l.y)).collect(),
            distance_matrix: matrix.to_rows(),
            total_distance: tour.total_distance,
            permutations_evaluated,
            mode,
        }
    }

    pub fn start_city(&self) -> Option<CityId> {
        self.visiting_order.first().copied()
    }

    /// Coordinates rearranged into visiting order, for drawing the loop
    pub fn ordered_coordinates(&self) -> Vec<(f64, f64)> {
        self.visiting_order
            .iter()
            .filter_map(|&city| self.coordinates.get(city).copied())
            .collect()
    }

    pub fn tour(&self) -> Tour {
        Tour {
            visiting_order: self.visiting_order.clone(),
            total_distance: self.total_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_solution() -> TourSolution {
        let locations = vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ];
        let matrix = DistanceMatrix::from_locations(&locations);
        let tour = Tour::from_permutation(0, &[1, 2, 3], 4.0);
        TourSolution::new(tour, &locations, &matrix, 6, SearchMode::Exact)
    }

    #[test]
    fn test_ordered_coordinates() {
        let solution = square_solution();

        assert_eq!(solution.start_city(), Some(0));
        assert_eq!(
            solution.ordered_coordinates(),
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let solution = square_solution();
        let json = serde_json::to_string(&solution).unwrap();

        assert!(json.contains("\"visiting_order\":[0,1,2,3,0]"));
        assert!(json.contains("\"mode\":\"exact\""));

        let back: TourSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
    }
}
