//! Permutation helpers shared by every strategy.
//!
//! A tour is a `Vec<usize>` holding each city index in `0..n` exactly once.
//! It is implicitly closed: the last city connects back to the first.

use rand::seq::SliceRandom;
use rand::Rng;

/// Numerator of [`fitness_score`]. Any positive constant yields the same
/// ranking.
pub const FITNESS_NUMERATOR: f64 = 42.0;

/// Creates a uniformly random permutation of `0..n` (Fisher–Yates).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Checks that `perm` contains every value in `0..n` exactly once.
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Fitness of a tour with the given cost: `42 / cost`.
///
/// Strictly decreasing in cost for positive costs. A zero cost yields
/// `f64::INFINITY`.
pub fn fitness_score(cost: u64) -> f64 {
    FITNESS_NUMERATOR / cost as f64
}

/// Number of positions at which two permutations hold different values.
///
/// Ranges from 0 (identical) to n. Rotations and reflections of the same
/// route usually score as highly diverse.
pub fn diversity(a: &[usize], b: &[usize]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Sum of [`diversity`] between `perm` and each of `others`.
pub fn total_diversity(perm: &[usize], others: &[Vec<usize>]) -> usize {
    others.iter().map(|other| diversity(perm, other)).sum()
}
