// Tour models for representing candidate and final closed tours

use crate::models::{CityId, Distance};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A closed tour: start city, every other city once, back to the start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Sequence of N+1 city indices, first and last equal to the start city
    pub visiting_order: Vec<CityId>,

    /// Total rounded distance of the closed loop
    pub total_distance: Distance,
}

impl Tour {
    /// Closes `permutation` into a loop around `start_city`
    pub fn from_permutation(
        start_city: CityId,
        permutation: &[CityId],
        total_distance: Distance,
    ) -> Self {
        let mut visiting_order = Vec::with_capacity(permutation.len() + 2);
        visiting_order.push(start_city);
        visiting_order.extend_from_slice(permutation);
        visiting_order.push(start_city);

        Self {
            visiting_order,
            total_distance,
        }
    }

    pub fn start_city(&self) -> Option<CityId> {
        self.visiting_order.first().copied()
    }

    /// Checks that the tour visits each of `0..n` exactly once and is closed
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.visiting_order.len() != n + 1 {
            return false;
        }
        if self.visiting_order.first() != self.visiting_order.last() {
            return false;
        }

        let mut seen = vec![false; n];
        for &city in &self.visiting_order[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

/// One evaluated permutation, tagged with its position in enumeration order
#[derive(Debug, Clone, PartialEq)]
pub struct TourCandidate {
    /// Global enumeration index of the permutation
    pub rank: u64,

    /// Visiting order between leaving and re-entering the start city
    pub permutation: Vec<CityId>,

    /// Rounded closed-tour cost
    pub cost: Distance,
}

impl TourCandidate {
    pub fn new(rank: u64, permutation: Vec<CityId>, cost: Distance) -> Self {
        Self {
            rank,
            permutation,
            cost,
        }
    }
}

// Lower cost sorts first; equal costs fall back to enumeration order so the
// first-enumerated tour wins ties
impl Ord for TourCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for TourCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for TourCandidate {}
