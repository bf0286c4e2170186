// Problem instance: the cities of one run plus the fixed start city

use crate::error::{SolverError, SolverResult};
use crate::models::{City, CityId, DistanceMatrix, Location};

/// Smallest city count that yields a meaningful tour
pub const MIN_CITIES: usize = 4;

/// Largest city count whose (N-1)! permutations can be ranked in a `u64`
pub const MAX_CITIES: usize = 21;

/// A validated set of cities with the designated start/end city
#[derive(Debug, Clone, PartialEq)]
pub struct TspInstance {
    /// Cities in index order; `cities[i].id == i`
    pub cities: Vec<City>,

    /// City where the tour departs and returns
    pub start_city: CityId,
}

impl TspInstance {
    /// Creates an instance from locations given in city order
    pub fn new(locations: Vec<Location>, start_city: CityId) -> SolverResult<Self> {
        let n = locations.len();
        validate_city_count(n)?;
        validate_start_city(start_city, n)?;

        let cities = locations
            .into_iter()
            .enumerate()
            .map(|(id, location)| City::new(id, location))
            .collect();

        Ok(Self { cities, start_city })
    }

    /// Creates an instance from separate x and y coordinate sequences
    pub fn from_coordinates(xs: &[f64], ys: &[f64], start_city: CityId) -> SolverResult<Self> {
        if xs.len() != ys.len() {
            return Err(SolverError::invalid(format!(
                "coordinate sequences differ in length ({} x values, {} y values)",
                xs.len(),
                ys.len()
            )));
        }

        let locations = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Location::new(x, y))
            .collect();
        Self::new(locations, start_city)
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.cities.iter().map(|city| city.location).collect()
    }

    /// Builds the rounded distance matrix for these cities
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_locations(&self.locations())
    }

    /// Every city index except the start city, ascending
    pub fn remaining_cities(&self) -> Vec<CityId> {
        (0..self.len()).filter(|&c| c != self.start_city).collect()
    }
}

/// Rejects city counts outside `[MIN_CITIES, MAX_CITIES]`
pub fn validate_city_count(n: usize) -> SolverResult<()> {
    if n < MIN_CITIES {
        return Err(SolverError::invalid(format!(
            "need at least {} cities, got {}",
            MIN_CITIES, n
        )));
    }
    if n > MAX_CITIES {
        return Err(SolverError::invalid(format!(
            "at most {} cities can be enumerated exhaustively, got {}",
            MAX_CITIES, n
        )));
    }
    Ok(())
}

/// Rejects a start city outside `[0, n)`
pub fn validate_start_city(start_city: CityId, n: usize) -> SolverResult<()> {
    if start_city >= n {
        return Err(SolverError::invalid(format!(
            "start city {} outside [0, {})",
            start_city, n
        )));
    }
    Ok(())
}
