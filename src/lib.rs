//! Metaheuristics for the symmetric Euclidean Traveling Salesman Problem.
//!
//! All strategies work on a precomputed [`distance::DistanceMatrix`] of
//! rounded Euclidean distances and represent a tour as a permutation of
//! city indices `0..n`, closed by the edge from the last city back to the
//! first.
//!
//! - **Genetic Algorithm (GA)**: permutation population evolved with
//!   fitness-diversity or tournament selection, cycle or order crossover
//!   and one of five mutation operators.
//! - **VBSS**: Value-Biased Stochastic Sampling, a randomized nearest
//!   neighbor constructor repeated for many independent samples.
//! - **Random sampling**: best of uniformly random permutations, as a
//!   baseline for the other two.
//!
//! Instances are read from TSPLIB files by [`tsplib`], and [`solve`] runs
//! any [`Strategy`] with a single caller-owned random generator.
//!
//! # Example
//!
//! ```
//! use u_tsp::distance::{DistanceMatrix, Point};
//! use u_tsp::ga::GaConfig;
//! use u_tsp::random::create_rng;
//! use u_tsp::{solve, Strategy};
//!
//! let points: Vec<Point> = (0..8)
//!     .map(|i| {
//!         let a = i as f64 * std::f64::consts::TAU / 8.0;
//!         Point::new(100.0 * a.cos(), 100.0 * a.sin())
//!     })
//!     .collect();
//! let dm = DistanceMatrix::from_points(&points);
//!
//! let strategy = Strategy::Genetic(GaConfig::default().with_generations(200));
//! let solution = solve(&dm, &strategy, &mut create_rng(42)).unwrap();
//! assert_eq!(solution.tour.len(), 8);
//! assert_eq!(dm.tour_cost(&solution.tour), solution.cost);
//! ```

pub mod distance;
pub mod error;
pub mod ga;
pub mod random;
pub mod sampling;
pub mod solution;
pub mod solver;
pub mod tour;
pub mod tsplib;
pub mod vbss;

#[cfg(test)]
mod test_utils;

pub use error::{Result, TspError};
pub use solution::Solution;
pub use solver::{solve, Strategy};
