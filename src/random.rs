//! Seeded random sources.
//!
//! Every solver in this crate receives its randomness through an explicit
//! `&mut R where R: Rng` handle. These helpers create that handle from a
//! seed so that runs are reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic random number generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when
/// `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
