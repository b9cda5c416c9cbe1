//! Genetic Algorithm over tours.
//!
//! Each generation runs **selection → mutation → crossover** over a
//! population of permutations and keeps the lowest-cost tour ever seen.
//! Operators mutate caller-owned tours in place; the population owns every
//! member for the duration of a generation.
//!
//! # Operator Catalogs
//!
//! - [`Selection`]: fitness + diversity with elitism (default), tournament
//! - [`Crossover`]: cycle (default), order
//! - [`Mutation`]: swap, insertion, reversal (default), block move, scramble
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters and active operators
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour and per-generation statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

mod config;
pub mod crossover;
pub mod mutation;
mod population;
mod runner;
mod selection;

pub use config::GaConfig;
pub use crossover::Crossover;
pub use mutation::Mutation;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::Selection;

use rand::Rng;

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }
}
