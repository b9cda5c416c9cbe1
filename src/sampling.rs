//! Monte Carlo search over independently constructed tours.
//!
//! [`best_of_samples`] drives any tour constructor for a fixed number of
//! samples and keeps the strictly lowest-cost tour. It backs both VBSS
//! ([`crate::vbss::VbssRunner`]) and the uniform baseline
//! [`RandomSampler`], which draws plain random permutations.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::random::rng_from_seed;
use crate::solution::Solution;
use crate::tour::random_permutation;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a multi-sample run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleResult {
    /// Lowest-cost tour over all samples.
    pub best: Solution,

    /// Number of samples actually drawn.
    pub samples: usize,

    /// Zero-based index of the sample that produced `best`.
    pub best_sample: usize,

    /// Number of times the best tour changed, counting the first sample.
    pub improvements: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Draws `samples` tours from `construct` and keeps the strictly lowest
/// cost one. Samples share nothing but the generator.
///
/// Returns `None` when `samples` is zero or the run is cancelled before the
/// first sample.
pub fn best_of_samples<R, F>(
    matrix: &DistanceMatrix,
    samples: usize,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
    mut construct: F,
) -> Option<SampleResult>
where
    R: Rng,
    F: FnMut(&DistanceMatrix, &mut R) -> Vec<usize>,
{
    let mut result: Option<SampleResult> = None;

    for sample in 0..samples {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            if let Some(ref mut r) = result {
                r.cancelled = true;
            }
            break;
        }

        let candidate = Solution::evaluate(construct(matrix, rng), matrix);
        match result {
            Some(ref mut r) => {
                r.samples = sample + 1;
                if candidate.cost < r.best.cost {
                    debug!(event = "sample_improvement", sample, best_cost = candidate.cost);
                    r.best = candidate;
                    r.best_sample = sample;
                    r.improvements += 1;
                }
            }
            None => {
                result = Some(SampleResult {
                    best: candidate,
                    samples: 1,
                    best_sample: 0,
                    improvements: 1,
                    cancelled: false,
                });
            }
        }
    }

    result
}

/// Baseline strategy: the best of `samples` uniformly random permutations.
pub struct RandomSampler;

impl RandomSampler {
    /// Runs random sampling with a generator seeded from `seed`.
    pub fn run(matrix: &DistanceMatrix, samples: usize, seed: Option<u64>) -> Result<SampleResult> {
        let mut rng = rng_from_seed(seed);
        Self::run_with_rng(matrix, samples, &mut rng, None)
    }

    /// Runs random sampling with a caller-supplied generator and an
    /// optional cancellation token.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        samples: usize,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SampleResult> {
        if samples == 0 {
            return Err(TspError::InvalidConfig("samples must be at least 1".into()));
        }
        let n = matrix.size();
        if n < 2 {
            return Err(TspError::DegenerateInstance(n));
        }

        info!(event = "sampling_start", cities = n, samples);
        let result = best_of_samples(matrix, samples, rng, cancel.as_deref(), |m, rng| {
            random_permutation(m.size(), rng)
        })
        .ok_or(TspError::Cancelled)?;
        info!(
            event = "sampling_end",
            best_cost = result.best.cost,
            samples = result.samples,
            cancelled = result.cancelled,
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::test_utils::{scattered, square_matrix};
    use crate::tour::is_valid_permutation;

    #[test]
    fn test_best_of_samples_keeps_lowest() {
        let dm = square_matrix();
        let tours = [vec![0, 2, 1, 3], vec![0, 1, 2, 3], vec![1, 0, 2, 3], vec![3, 2, 1, 0]];
        let mut next = tours.iter().cloned();
        let mut rng = create_rng(1);

        let result = best_of_samples(&dm, 4, &mut rng, None, |_, _| {
            next.next().unwrap_or_default()
        })
        .expect("four samples");

        assert_eq!(result.best.tour, vec![0, 1, 2, 3]);
        assert_eq!(result.best.cost, 40);
        assert_eq!(result.best_sample, 1);
        // A later tour of equal cost does not replace the best.
        assert_eq!(result.improvements, 2);
        assert_eq!(result.samples, 4);
    }

    #[test]
    fn test_best_of_zero_samples() {
        let dm = square_matrix();
        let mut rng = create_rng(1);
        let result = best_of_samples(&dm, 0, &mut rng, None, |m, rng| {
            random_permutation(m.size(), rng)
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_cancel_stops_sampling() {
        let dm = square_matrix();
        let mut rng = create_rng(1);
        let flag = AtomicBool::new(false);
        let mut drawn = 0;
        let result = best_of_samples(&dm, 100, &mut rng, Some(&flag), |m, rng| {
            drawn += 1;
            if drawn == 3 {
                flag.store(true, Ordering::Relaxed);
            }
            random_permutation(m.size(), rng)
        })
        .expect("three samples drawn");
        assert!(result.cancelled);
        assert_eq!(result.samples, 3);
    }

    #[test]
    fn test_random_sampler_square() {
        let dm = square_matrix();
        let result = RandomSampler::run(&dm, 200, Some(42)).expect("valid run");
        assert_eq!(result.best.cost, 40);
        assert_eq!(result.samples, 200);
    }

    #[test]
    fn test_random_sampler_reproducible() {
        let dm = scattered(20);
        let a = RandomSampler::run(&dm, 50, Some(5)).expect("valid run");
        let b = RandomSampler::run(&dm, 50, Some(5)).expect("valid run");
        assert_eq!(a.best, b.best);
        assert!(is_valid_permutation(&a.best.tour, 20));
    }

    #[test]
    fn test_random_sampler_rejects_zero_samples() {
        let dm = square_matrix();
        assert!(RandomSampler::run(&dm, 0, Some(1)).is_err());
    }
}
