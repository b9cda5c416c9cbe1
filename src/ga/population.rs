//! The GA population and its per-generation steps.

use super::crossover::Crossover;
use super::mutation::Mutation;
use super::selection::Selection;
use crate::distance::DistanceMatrix;
use crate::tour::{fitness_score, random_permutation};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered collection of tours over the same set of cities.
///
/// The population exclusively owns its members. Operators borrow one or two
/// members mutably for the duration of a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Vec<usize>>,
}

impl Population {
    /// Creates `size` independent uniformly random tours over `n` cities.
    pub fn random<R: Rng>(size: usize, n: usize, rng: &mut R) -> Self {
        Self {
            members: (0..size).map(|_| random_permutation(n, rng)).collect(),
        }
    }

    /// Wraps existing tours.
    pub fn from_members(members: Vec<Vec<usize>>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Vec<usize>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Tour cost of every member, in order.
    pub fn costs(&self, matrix: &DistanceMatrix) -> Vec<u64> {
        #[cfg(feature = "parallel")]
        {
            self.members.par_iter().map(|m| matrix.tour_cost(m)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.members.iter().map(|m| matrix.tour_cost(m)).collect()
        }
    }

    /// Index and cost of the lowest-cost member; the first one wins ties.
    ///
    /// Returns `None` for an empty population.
    pub fn fittest(&self, matrix: &DistanceMatrix) -> Option<(usize, u64)> {
        lowest(&self.costs(matrix))
    }

    /// Replaces the population with the one chosen by `selection`.
    ///
    /// `costs` are the current members' tour costs, in order.
    pub fn select<R: Rng>(&mut self, selection: &Selection, costs: &[u64], rng: &mut R) {
        let fitnesses: Vec<f64> = costs.iter().map(|&c| fitness_score(c)).collect();
        self.members = selection.select(&self.members, &fitnesses, rng);
    }

    /// Applies `mutation` to each member independently with probability
    /// `rate`.
    pub fn mutate<R: Rng>(&mut self, mutation: &Mutation, rate: f64, rng: &mut R) {
        for member in &mut self.members {
            if rng.random_range(0.0..1.0) < rate {
                mutation.apply(member, rng);
            }
        }
    }

    /// Applies `crossover` with probability `rate` to each consecutive pair
    /// `(0, 1), (2, 3), …`. With an odd size the last member is untouched.
    pub fn crossover<R: Rng>(&mut self, crossover: &Crossover, rate: f64, rng: &mut R) {
        for pair in self.members.chunks_exact_mut(2) {
            if rng.random_range(0.0..1.0) < rate {
                let (first, second) = pair.split_at_mut(1);
                crossover.apply(&mut first[0], &mut second[0], rng);
            }
        }
    }
}

/// Index and value of the smallest cost; the first one wins ties.
pub(crate) fn lowest(costs: &[u64]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (i, &c) in costs.iter().enumerate() {
        match best {
            Some((_, b)) if c >= b => {}
            _ => best = Some((i, c)),
        }
    }
    best
}

/// Mean of `fitness_score` over the given costs; 0 for no costs.
pub(crate) fn average_fitness(costs: &[u64]) -> f64 {
    if costs.is_empty() {
        return 0.0;
    }
    costs.iter().map(|&c| fitness_score(c)).sum::<f64>() / costs.len() as f64
}
