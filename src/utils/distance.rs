// Distance calculation utilities

use crate::models::{Distance, Location};

/// Decimal places kept for every edge length and tour total
pub const DISTANCE_PRECISION: i32 = 3;

/// Decimal places kept for jittered coordinates
pub const COORDINATE_PRECISION: i32 = 1;

/// Round `value` to `places` decimal places (half away from zero)
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round a distance to the fixed precision used throughout the solver
pub fn round_distance(value: Distance) -> Distance {
    round_to(value, DISTANCE_PRECISION)
}

/// Calculate the Euclidean distance between two points
pub fn euclidean_distance(p1: &Location, p2: &Location) -> Distance {
    p1.distance_to(p2)
}

/// Euclidean distance rounded to `DISTANCE_PRECISION` decimals
pub fn rounded_distance(p1: &Location, p2: &Location) -> Distance {
    round_distance(euclidean_distance(p1, p2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let p1 = Location::new(0.0, 0.0);
        let p2 = Location::new(3.0, 4.0);

        assert_eq!(euclidean_distance(&p1, &p2), 5.0);
    }

    #[test]
    fn test_rounded_distance() {
        let p1 = Location::new(0.0, 0.0);
        let p2 = Location::new(1.0, 1.0);

        // sqrt(2) = 1.41421356...
        assert_eq!(rounded_distance(&p1, &p2), 1.414);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.71828, 3), 2.718);
        assert_eq!(round_to(0.26, 1), 0.3);
        assert_eq!(round_to(-0.26, 1), -0.3);
        assert_eq!(round_to(4.0, 3), 4.0);
    }
}
