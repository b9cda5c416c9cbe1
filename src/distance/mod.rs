//! Distance computations between cities.

mod matrix;

pub use matrix::{DistanceMatrix, Point};
