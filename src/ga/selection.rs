//! Selection strategies for the GA.
//!
//! Selection builds the next population from the current one. Each
//! strategy returns a new population of the same size; members are copied,
//! so the same tour may appear more than once.
//!
//! Fitness here is [`fitness_score`](crate::tour::fitness_score), so
//! **higher is better**.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::tour::diversity;
use rand::Rng;

/// Selection strategy for building the next population.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Selection;
///
/// // Fitness plus diversity with elitism (the default)
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::FitnessDiversity);
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate selection combined with diversity.
    ///
    /// Slot 0 always receives the fittest member (elitism). Every later
    /// slot `i` receives the member maximizing
    /// `fitness(m) + Σ diversity(m, chosen[k])` over `k < i`; the first
    /// member seen wins ties. Members that are fit *and* unlike those
    /// already retained survive.
    ///
    /// # Complexity
    /// O(p² · n) per generation, keeping a running diversity sum per member
    #[default]
    FitnessDiversity,

    /// Tournament selection: for each slot draw `k` members with
    /// replacement and copy the fittest (the first drawn wins ties).
    ///
    /// # Complexity
    /// O(k) per slot
    Tournament(usize),
}

impl Selection {
    /// Builds the next population from `population` whose fitness values
    /// are given by `fitnesses` (same order).
    ///
    /// # Panics
    /// Panics if `population` is empty or the two slices differ in length.
    pub fn select<R: Rng>(
        &self,
        population: &[Vec<usize>],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Vec<Vec<usize>> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        assert_eq!(
            population.len(),
            fitnesses.len(),
            "one fitness value per member required"
        );

        match self {
            Selection::FitnessDiversity => fitness_diversity(population, fitnesses),
            Selection::Tournament(k) => (0..population.len())
                .map(|_| population[tournament(fitnesses, *k, rng)].clone())
                .collect(),
        }
    }
}

/// Index of the highest fitness; the first one wins ties.
pub(crate) fn fittest_index(fitnesses: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f > fitnesses[best] {
            best = i;
        }
    }
    best
}

fn fitness_diversity(population: &[Vec<usize>], fitnesses: &[f64]) -> Vec<Vec<usize>> {
    let size = population.len();
    let mut next: Vec<Vec<usize>> = Vec::with_capacity(size);
    next.push(population[fittest_index(fitnesses)].clone());

    // diversity_sum[m] = Σ diversity(population[m], chosen) over chosen so far
    let mut diversity_sum = vec![0usize; size];

    while next.len() < size {
        if let Some(last) = next.last() {
            for (sum, member) in diversity_sum.iter_mut().zip(population) {
                *sum += diversity(member, last);
            }
        }

        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, (&fitness, &div)) in fitnesses.iter().zip(&diversity_sum).enumerate() {
            let score = fitness + div as f64;
            if score > best_score {
                best_score = score;
                best_idx = i;
            }
        }
        next.push(population[best_idx].clone());
    }

    next
}

/// Tournament selection: pick k random members, return the fittest.
fn tournament<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitnesses.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitnesses[idx] > fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
