use log::{debug, info};
use rayon::prelude::*;

use crate::algorithms::TourSolver;
use crate::config::{SearchMode, SolverConfig};
use crate::error::{SolverError, SolverResult};
use crate::models::{
    CityId, Distance, DistanceMatrix, Tour, TourCandidate, TourSolution, TspInstance,
};
use crate::utils::distance::round_distance;
use crate::utils::permutations::{factorial, Permutations};

/// Rank ranges handed out per worker thread
const CHUNKS_PER_THREAD: u64 = 8;

/// Closed-tour cost: both edges touching the start city plus every edge
/// along the permutation, rounded once at the end.
pub fn tour_cost(start_city: CityId, matrix: &DistanceMatrix, permutation: &[CityId]) -> Distance {
    debug_assert_eq!(permutation.len() + 1, matrix.size());

    let (first, last) = match (permutation.first(), permutation.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return 0.0,
    };

    let mut total = matrix.get(start_city, first) + matrix.get(start_city, last);
    for pair in permutation.windows(2) {
        total += matrix.get(pair[0], pair[1]);
    }

    round_distance(total)
}

/// Cost of every permutation, in the order given
pub fn evaluate_all<I, P>(
    start_city: CityId,
    matrix: &DistanceMatrix,
    permutations: I,
) -> Vec<Distance>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[CityId]>,
{
    permutations
        .into_iter()
        .map(|perm| tour_cost(start_city, matrix, perm.as_ref()))
        .collect()
}

/// Index of the smallest cost; the first one wins ties
pub fn select_best<I>(costs: I) -> Option<usize>
where
    I: IntoIterator<Item = Distance>,
{
    let mut best: Option<(usize, Distance)> = None;
    for (index, cost) in costs.into_iter().enumerate() {
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((index, cost)),
        }
    }
    best.map(|(index, _)| index)
}

/// Running minimum over evaluated permutations
#[derive(Debug, Clone, Default)]
pub struct BestTour {
    best: Option<TourCandidate>,
    evaluated: u64,
}

impl BestTour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluated permutation
    pub fn offer(&mut self, rank: u64, cost: Distance, permutation: &[CityId]) {
        self.evaluated += 1;

        if let Some(best) = self.best.as_mut() {
            if cost < best.cost || (cost == best.cost && rank < best.rank) {
                best.rank = rank;
                best.cost = cost;
                best.permutation.clear();
                best.permutation.extend_from_slice(permutation);
            }
        } else {
            self.best = Some(TourCandidate::new(rank, permutation.to_vec(), cost));
        }
    }

    /// Combine two partial results; lower cost, then lower rank, wins
    pub fn merge(self, other: BestTour) -> BestTour {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        BestTour {
            best,
            evaluated: self.evaluated + other.evaluated,
        }
    }

    pub fn best(&self) -> Option<&TourCandidate> {
        self.best.as_ref()
    }

    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }
}

/// Evaluate the permutations with ranks in `[from, to)`
fn search_range(
    start_city: CityId,
    matrix: &DistanceMatrix,
    remaining: &[CityId],
    from: u64,
    to: u64,
) -> BestTour {
    let mut tracker = BestTour::new();
    let mut permutations = Permutations::starting_at(remaining.to_vec(), from);

    for rank in from..to {
        match permutations.next_slice() {
            Some(perm) => tracker.offer(rank, tour_cost(start_city, matrix, perm), perm),
            None => break,
        }
    }

    if let Some(best) = tracker.best() {
        debug!(
            "Range [{}, {}) best: {:?} at rank {} (cost {:.3})",
            from, to, best.permutation, best.rank, best.cost
        );
    }
    tracker
}

/// Exhaustive solver: evaluates every permutation (or the bounded prefix)
/// and keeps the first minimum in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    /// Exact or bounded search
    pub mode: SearchMode,

    /// Worker threads; `None` means rayon's default
    pub threads: Option<usize>,
}

impl ExhaustiveSolver {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            threads: None,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            mode: config.mode,
            threads: config.threads,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// How many leading permutations this mode searches
    fn plan(&self, instance: &TspInstance) -> SolverResult<u64> {
        let n = instance.len();
        let total = factorial(n.saturating_sub(1)).ok_or_else(|| {
            SolverError::invalid(format!("{} cities are too many to enumerate", n))
        })?;
        let limit = self.mode.permutation_limit(total, n);

        info!(
            "Solving {} cities from start city {} in {} mode: {} of {} permutations",
            n, instance.start_city, self.mode, limit, total
        );
        Ok(limit)
    }

    /// Single-threaded search in one pass over the enumeration
    pub fn solve_sequential(&self, instance: &TspInstance) -> SolverResult<TourSolution> {
        let limit = self.plan(instance)?;
        let matrix = instance.distance_matrix();
        let tracker = search_range(
            instance.start_city,
            &matrix,
            &instance.remaining_cities(),
            0,
            limit,
        );
        self.finish(instance, &matrix, tracker)
    }

    /// Splits the rank range into contiguous chunks evaluated on the rayon
    /// pool. Each chunk keeps its own best and is merged exactly once, so the
    /// result is identical to `solve_sequential`.
    pub fn solve_with_parallel(&self, instance: &TspInstance) -> SolverResult<TourSolution> {
        let limit = self.plan(instance)?;
        let matrix = instance.distance_matrix();
        let remaining = instance.remaining_cities();
        let start_city = instance.start_city;

        let search = |workers: usize| {
            let chunks = (workers as u64 * CHUNKS_PER_THREAD).clamp(1, limit.max(1));
            let chunk_size = limit.div_ceil(chunks).max(1);
            debug!(
                "Searching {} permutations in {} chunks of {} on {} threads",
                limit, chunks, chunk_size, workers
            );

            (0..chunks)
                .into_par_iter()
                .map(|chunk| {
                    let from = chunk * chunk_size;
                    let to = (from + chunk_size).min(limit);
                    if from >= to {
                        BestTour::new()
                    } else {
                        search_range(start_city, &matrix, &remaining, from, to)
                    }
                })
                .reduce(BestTour::new, BestTour::merge)
        };

        let tracker = match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SolverError::Config(format!("thread pool: {}", e)))?;
                pool.install(|| search(threads))
            }
            None => search(rayon::current_num_threads()),
        };

        self.finish(instance, &matrix, tracker)
    }

    fn finish(
        &self,
        instance: &TspInstance,
        matrix: &DistanceMatrix,
        tracker: BestTour,
    ) -> SolverResult<TourSolution> {
        let evaluated = tracker.evaluated();
        let best = tracker
            .best
            .ok_or_else(|| SolverError::invalid("no permutations were evaluated"))?;

        let tour = Tour::from_permutation(instance.start_city, &best.permutation, best.cost);
        debug_assert!(tour.is_valid_for(instance.len()));

        info!(
            "Best tour {:?} with total distance {:.3} ({} permutations evaluated)",
            tour.visiting_order, tour.total_distance, evaluated
        );

        Ok(TourSolution::new(
            tour,
            &instance.locations(),
            matrix,
            evaluated,
            self.mode,
        ))
    }
}

impl TourSolver for ExhaustiveSolver {
    fn solve(&self, instance: &TspInstance) -> SolverResult<TourSolution> {
        if self.threads == Some(1) {
            self.solve_sequential(instance)
        } else {
            self.solve_with_parallel(instance)
        }
    }

    fn tour_cost(
        &self,
        start_city: CityId,
        matrix: &DistanceMatrix,
        permutation: &[CityId],
    ) -> Distance {
        tour_cost(start_city, matrix, permutation)
    }
}
