//! Dense, rounded Euclidean distance matrix.

use crate::models::{CityId, Distance, Location};
use crate::utils::distance::rounded_distance;

/// An N×N table of rounded distances stored in row-major order.
///
/// Built once per run and read-only afterwards, so it can be shared across
/// worker threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<Distance>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from city locations.
    ///
    /// Every ordered pair is computed on its own (both triangles); the
    /// table is symmetric because the rounding is applied identically.
    pub fn from_locations(locations: &[Location]) -> Self {
        let size = locations.len();
        let mut data = Vec::with_capacity(size * size);
        for from in locations {
            for to in locations {
                data.push(rounded_distance(from, to));
            }
        }
        Self { data, size }
    }

    /// Returns the distance between city `from` and city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: CityId, to: CityId) -> Distance {
        self.data[from * self.size + to]
    }

    /// Number of cities covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: CityId) -> &[Distance] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Copies the table out as nested rows, for serialisation.
    pub fn to_rows(&self) -> Vec<Vec<Distance>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }

    /// Checks the zero diagonal and exact symmetry.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0.0 && (0..i).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}
