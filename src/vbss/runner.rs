//! VBSS multi-sample driver.

use super::config::VbssConfig;
use super::construct::construct_tour;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::random::rng_from_seed;
use crate::sampling::{best_of_samples, SampleResult};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Executes VBSS: `samples` independent constructions, best one kept.
///
/// # Usage
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
/// use u_tsp::vbss::{VbssConfig, VbssRunner};
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ]);
/// let config = VbssConfig::default().with_samples(100).with_seed(42);
/// let result = VbssRunner::run(&dm, &config).unwrap();
/// assert_eq!(result.best.cost, 40);
/// ```
pub struct VbssRunner;

impl VbssRunner {
    /// Runs VBSS with a generator seeded from [`VbssConfig::seed`].
    pub fn run(matrix: &DistanceMatrix, config: &VbssConfig) -> Result<SampleResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng, None)
    }

    /// Runs VBSS with a caller-supplied generator and an optional
    /// cancellation token, checked before each sample.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &VbssConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SampleResult> {
        config.validate().map_err(TspError::InvalidConfig)?;
        let n = matrix.size();
        if n < 2 {
            return Err(TspError::DegenerateInstance(n));
        }

        info!(
            event = "vbss_start",
            cities = n,
            samples = config.samples,
            bias = config.bias,
        );

        let bias = config.bias;
        let result = best_of_samples(matrix, config.samples, rng, cancel.as_deref(), |m, rng| {
            construct_tour(m, bias, rng)
        })
        .ok_or(TspError::Cancelled)?;

        info!(
            event = "vbss_end",
            best_cost = result.best.cost,
            samples = result.samples,
            best_sample = result.best_sample,
            cancelled = result.cancelled,
        );

        Ok(result)
    }
}
