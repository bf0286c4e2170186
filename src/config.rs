//! Run configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Command-line flags are layered on top of a loaded file by the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SolverError, SolverResult};
use crate::models::{validate_city_count, validate_start_city};

/// How much of the permutation space is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Every one of the (N-1)! permutations. Always finds the optimum.
    #[default]
    Exact,
    /// Only the first `total - total / (N-1)` permutations in enumeration
    /// order. Approximate: the true optimum may be discarded.
    Bounded,
}

impl SearchMode {
    /// Number of leading permutations (out of `total`) searched for `n` cities.
    pub fn permutation_limit(&self, total: u64, n: usize) -> u64 {
        match self {
            SearchMode::Exact => total,
            SearchMode::Bounded => {
                let divisor = n.saturating_sub(1).max(1) as u64;
                total - total / divisor
            }
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, SearchMode::Exact)
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Exact => write!(f, "exact"),
            SearchMode::Bounded => write!(f, "bounded (approximate)"),
        }
    }
}

/// Parameters of one solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Number of cities.
    pub cities: usize,
    /// Fixed start city; `None` picks one from the seeded generator.
    pub start_city: Option<usize>,
    /// Generator seed; `None` derives one from the clock.
    pub seed: Option<u64>,
    /// Perturb generated coordinates by a small random offset.
    pub jitter: bool,
    /// Exhaustive or truncated search.
    pub mode: SearchMode,
    /// Worker threads; `None` uses every core, `Some(1)` runs sequentially.
    pub threads: Option<usize>,
    /// Where to write a PNG plot of the best tour.
    pub plot: Option<PathBuf>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cities: 6,
            start_city: None,
            seed: None,
            jitter: false,
            mode: SearchMode::Exact,
            threads: None,
            plot: None,
        }
    }
}

impl SolverConfig {
    /// Loads a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SolverResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> SolverResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config)
    }

    /// Semantic checks that serde cannot express.
    pub fn validate(&self) -> SolverResult<()> {
        validate_city_count(self.cities)?;
        if let Some(start) = self.start_city {
            validate_start_city(start, self.cities)?;
        }
        if self.threads == Some(0) {
            return Err(SolverError::invalid("thread count must be at least 1"));
        }
        if let Some(plot) = &self.plot {
            if plot.as_os_str().is_empty() {
                return Err(SolverError::Config("plot path is empty".to_string()));
            }
        }
        Ok(())
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
    }
}
