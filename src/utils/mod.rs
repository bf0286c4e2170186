// Utilities: distances, coordinate generation, enumeration and rendering

pub mod coordinates;
pub mod distance;
pub mod permutations;
pub mod render;
