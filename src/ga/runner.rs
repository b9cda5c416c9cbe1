//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → (selection → mutation → crossover → best tracking) × generations.

use super::config::GaConfig;
use super::population::{average_fitness, lowest, Population};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::random::rng_from_seed;
use crate::solution::Solution;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Statistics recorded after each generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,

    /// Cost of the best tour seen so far.
    pub best_cost: u64,

    /// Cost of the best member of this generation.
    pub generation_best_cost: u64,

    /// Mean fitness score over the population.
    pub average_fitness: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Solution,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// One entry for the initial population, then one per generation.
    pub history: Vec<GenerationStats>,
}

impl GaResult {
    /// Best cost after each generation, starting with the initial population.
    pub fn cost_history(&self) -> Vec<u64> {
        self.history.iter().map(|s| s.best_cost).collect()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
/// use u_tsp::ga::{GaConfig, GaRunner};
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ]);
/// let config = GaConfig::default().with_generations(200).with_seed(42);
/// let result = GaRunner::run(&dm, &config).unwrap();
/// assert_eq!(result.best.cost, 40);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from [`GaConfig::seed`].
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng, None)
    }

    /// Runs the GA with a caller-supplied generator and an optional
    /// cancellation token.
    ///
    /// `config.seed` is ignored. If `cancel` is `Some` and the flag is set,
    /// the GA stops before the next generation and returns the best tour
    /// found so far.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate().map_err(TspError::InvalidConfig)?;
        let n = matrix.size();
        if n < 2 {
            return Err(TspError::DegenerateInstance(n));
        }

        info!(
            event = "ga_start",
            cities = n,
            population = config.population_size,
            generations = config.generations,
            crossover = ?config.crossover,
            mutation = ?config.mutation,
            selection = ?config.selection,
        );

        // 1. Initialize population
        let mut population = Population::random(config.population_size, n, rng);
        let mut costs = population.costs(matrix);

        // 2. Track best
        let (idx, initial_cost) =
            lowest(&costs).ok_or_else(|| TspError::InvalidConfig("empty population".into()))?;
        let mut best = Solution {
            tour: population.members()[idx].clone(),
            cost: initial_cost,
        };
        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(GenerationStats {
            generation: 0,
            best_cost: best.cost,
            generation_best_cost: initial_cost,
            average_fitness: average_fitness(&costs),
        });

        let mut generations = 0usize;
        let mut cancelled = false;

        // 3. Evolutionary loop
        for generation in 1..=config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population.select(&config.selection, &costs, rng);
            population.mutate(&config.mutation, config.mutation_rate, rng);
            population.crossover(&config.crossover, config.crossover_rate, rng);

            costs = population.costs(matrix);
            let (idx, gen_cost) =
                lowest(&costs).ok_or_else(|| TspError::InvalidConfig("empty population".into()))?;
            if gen_cost < best.cost {
                best = Solution {
                    tour: population.members()[idx].clone(),
                    cost: gen_cost,
                };
                debug!(event = "ga_improvement", generation, best_cost = best.cost);
            }

            history.push(GenerationStats {
                generation,
                best_cost: best.cost,
                generation_best_cost: gen_cost,
                average_fitness: average_fitness(&costs),
            });
            generations = generation;
        }

        info!(
            event = "ga_end",
            best_cost = best.cost,
            generations,
            cancelled,
        );

        Ok(GaResult {
            best,
            generations,
            cancelled,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
