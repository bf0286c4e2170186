// Random city coordinates for a run

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{SolverError, SolverResult};
use crate::models::{validate_city_count, validate_start_city, CityId, Location, TspInstance};
use crate::utils::distance::{round_to, COORDINATE_PRECISION};

/// Half-width of the symmetric offset added to each jittered coordinate
pub const JITTER_RANGE: f64 = 0.3;

/// x and y values for cities `0..N`, in city order
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Location::new(x, y))
            .collect()
    }
}

/// Generate coordinates for `n` cities.
///
/// Each axis starts as `0..n` and is shuffled independently, so every
/// integer appears once per axis. With `jitter` set, each value is then
/// moved by a uniform offset in `[-JITTER_RANGE, JITTER_RANGE]` and
/// rounded to one decimal place.
///
/// The generator is passed in so callers control seeding.
pub fn generate_coordinates<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    jitter: bool,
) -> SolverResult<Coordinates> {
    if n < 1 {
        return Err(SolverError::invalid("cannot generate coordinates for 0 cities"));
    }

    let mut xs: Vec<f64> = (0..n).map(|v| v as f64).collect();
    let mut ys: Vec<f64> = (0..n).map(|v| v as f64).collect();
    xs.shuffle(rng);
    ys.shuffle(rng);

    if jitter {
        for value in xs.iter_mut().chain(ys.iter_mut()) {
            let offset = rng.gen_range(-JITTER_RANGE..=JITTER_RANGE);
            *value = round_to(*value + offset, COORDINATE_PRECISION);
        }
    }

    debug!("Generated coordinates for {} cities (jitter: {})", n, jitter);

    Ok(Coordinates { xs, ys })
}

/// Pick a start city uniformly from `0..n`
pub fn random_start_city<R: Rng + ?Sized>(n: usize, rng: &mut R) -> SolverResult<CityId> {
    if n < 1 {
        return Err(SolverError::invalid("cannot pick a start city among 0 cities"));
    }
    Ok(rng.gen_range(0..n))
}

/// Build a full instance for `n` cities.
///
/// A missing start city is drawn from `rng` before the coordinates, so a
/// given seed always produces the same start city and layout.
pub fn generate_instance<R: Rng + ?Sized>(
    n: usize,
    start_city: Option<CityId>,
    jitter: bool,
    rng: &mut R,
) -> SolverResult<TspInstance> {
    validate_city_count(n)?;
    let start_city = match start_city {
        Some(city) => {
            validate_start_city(city, n)?;
            city
        }
        None => random_start_city(n, rng)?,
    };

    let coordinates = generate_coordinates(n, rng, jitter)?;
    TspInstance::new(coordinates.locations(), start_city)
}
