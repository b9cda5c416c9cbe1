//! Strategy selection over a single problem instance.
//!
//! The GA, VBSS and random sampling are independent alternatives over the
//! same [`DistanceMatrix`]; [`solve`] runs the chosen one with a single
//! caller-owned generator and returns the best [`Solution`].

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::sampling::RandomSampler;
use crate::solution::Solution;
use crate::vbss::{VbssConfig, VbssRunner};
use rand::Rng;

/// The optimization strategy to run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Genetic algorithm.
    Genetic(GaConfig),
    /// Value-biased stochastic sampling.
    Vbss(VbssConfig),
    /// Best of uniformly random permutations.
    RandomSampling {
        /// Number of permutations to draw.
        samples: usize,
    },
}

impl Strategy {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Genetic(_) => "ga",
            Strategy::Vbss(_) => "vbss",
            Strategy::RandomSampling { .. } => "sampling",
        }
    }
}

/// Runs `strategy` on `matrix`, drawing all randomness from `rng`.
///
/// Seeds inside the strategy configuration are ignored in favor of `rng`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
/// use u_tsp::random::create_rng;
/// use u_tsp::vbss::VbssConfig;
/// use u_tsp::{solve, Strategy};
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ]);
/// let strategy = Strategy::Vbss(VbssConfig::default().with_samples(100));
/// let solution = solve(&dm, &strategy, &mut create_rng(42)).unwrap();
/// assert_eq!(solution.cost, 40);
/// ```
pub fn solve<R: Rng>(matrix: &DistanceMatrix, strategy: &Strategy, rng: &mut R) -> Result<Solution> {
    let best = match strategy {
        Strategy::Genetic(config) => GaRunner::run_with_rng(matrix, config, rng, None)?.best,
        Strategy::Vbss(config) => VbssRunner::run_with_rng(matrix, config, rng, None)?.best,
        Strategy::RandomSampling { samples } => {
            RandomSampler::run_with_rng(matrix, *samples, rng, None)?.best
        }
    };
    Ok(best)
}
