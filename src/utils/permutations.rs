// Lazy lexicographic permutation enumeration

use crate::models::CityId;

/// `k!`, or `None` when it does not fit in a `u64` (k > 20)
pub fn factorial(k: usize) -> Option<u64> {
    (1..=k as u64).try_fold(1u64, |acc, v| acc.checked_mul(v))
}

/// Rearranges `items` into the next permutation in lexicographic order.
///
/// Returns `false`, leaving `items` untouched, when it is already the last
/// (descending) permutation.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `i`
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    // Rightmost element greater than the pivot
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }

    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// The permutation at position `rank` in the lexicographic order of
/// `sorted` (factorial number system). `None` if `rank` is out of range.
pub fn nth_permutation(sorted: &[CityId], mut rank: u64) -> Option<Vec<CityId>> {
    let total = factorial(sorted.len())?;
    if rank >= total {
        return None;
    }

    let mut pool = sorted.to_vec();
    let mut result = Vec::with_capacity(sorted.len());
    for remaining in (0..sorted.len()).rev() {
        // remaining <= 19 here, so this cannot overflow
        let block = factorial(remaining)?;
        let index = (rank / block) as usize;
        rank %= block;
        result.push(pool.remove(index));
    }
    Some(result)
}

/// Every ordering of a set of cities, produced one at a time in
/// lexicographic order of the city indices.
///
/// Only the current permutation is held in memory. The sequence can be
/// positioned at any rank and restarted from that position.
#[derive(Debug, Clone)]
pub struct Permutations {
    origin: Vec<CityId>,
    current: Vec<CityId>,
    in_range: bool,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    /// All permutations of `cities`, starting from the ascending order
    pub fn new(mut cities: Vec<CityId>) -> Self {
        cities.sort_unstable();
        Self {
            origin: cities.clone(),
            current: cities,
            in_range: true,
            started: false,
            exhausted: false,
        }
    }

    /// All permutations of `{0, .., n-1} \ {start_city}`
    pub fn excluding(n: usize, start_city: CityId) -> Self {
        Self::new((0..n).filter(|&c| c != start_city).collect())
    }

    /// Same set as `new`, but the first item yielded is the one at `rank`.
    /// An out-of-range rank gives an empty sequence.
    pub fn starting_at(mut cities: Vec<CityId>, rank: u64) -> Self {
        cities.sort_unstable();
        match nth_permutation(&cities, rank) {
            Some(first) => Self {
                origin: first.clone(),
                current: first,
                in_range: true,
                started: false,
                exhausted: false,
            },
            None => Self {
                origin: cities.clone(),
                current: cities,
                in_range: false,
                started: false,
                exhausted: true,
            },
        }
    }

    /// Rewinds to the position the sequence was created at
    pub fn reset(&mut self) {
        self.current.clone_from(&self.origin);
        self.started = false;
        self.exhausted = !self.in_range;
    }

    /// Advances and borrows the next permutation without allocating
    pub fn next_slice(&mut self) -> Option<&[CityId]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !next_permutation(&mut self.current) {
            self.exhausted = true;
            return None;
        }
        Some(&self.current)
    }
}

impl Iterator for Permutations {
    type Item = Vec<CityId>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_slice().map(|perm| perm.to_vec())
    }
}
