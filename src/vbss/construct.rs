//! Single-tour VBSS construction.

use crate::distance::DistanceMatrix;
use rand::Rng;

/// Builds one tour by value-biased stochastic sampling.
///
/// # Algorithm
///
/// 1. Start at a uniformly random city
/// 2. Weight every unvisited city `c` by `1 / distance(current, c)^bias`,
///    enumerating unvisited cities in ascending index order
/// 3. Normalize the weights, draw one uniform `r ∈ [0, 1)` and take the
///    first city whose cumulative probability exceeds `r`
/// 4. Move there and repeat until every city is placed
///
/// Weights are computed as `(nearest / distance)^bias`, which normalizes to
/// the same probabilities without overflowing for large exponents. Cities at
/// distance 0 from the current one share all the probability mass when
/// `bias > 0`.
///
/// # Complexity
/// O(n²)
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
/// use u_tsp::random::create_rng;
/// use u_tsp::tour::is_valid_permutation;
/// use u_tsp::vbss::construct_tour;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(5.0, 5.0),
/// ]);
/// let tour = construct_tour(&dm, 2.0, &mut create_rng(1));
/// assert!(is_valid_permutation(&tour, 3));
/// ```
pub fn construct_tour<R: Rng>(matrix: &DistanceMatrix, bias: f64, rng: &mut R) -> Vec<usize> {
    let n = matrix.size();
    let mut tour = Vec::with_capacity(n);
    if n == 0 {
        return tour;
    }

    let mut current = rng.random_range(0..n);
    tour.push(current);
    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != current).collect();
    let mut weights = Vec::with_capacity(n);

    while !unvisited.is_empty() {
        candidate_weights(matrix.row(current), &unvisited, bias, &mut weights);
        let pos = sample_index(&weights, rng);
        current = unvisited.remove(pos);
        tour.push(current);
    }

    tour
}

/// Fills `weights` with the unnormalized selection weight of each candidate.
fn candidate_weights(row: &[u64], candidates: &[usize], bias: f64, weights: &mut Vec<f64>) {
    weights.clear();
    let nearest = candidates.iter().map(|&c| row[c]).min().unwrap_or(0);

    if bias == 0.0 {
        weights.extend(candidates.iter().map(|_| 1.0));
    } else if nearest == 0 {
        weights.extend(
            candidates
                .iter()
                .map(|&c| if row[c] == 0 { 1.0 } else { 0.0 }),
        );
    } else {
        let nearest = nearest as f64;
        weights.extend(
            candidates
                .iter()
                .map(|&c| (nearest / row[c] as f64).powf(bias)),
        );
    }
}

/// Inverse-CDF sampling over the normalized weights.
fn sample_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    let r = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / total;
        if r < cumulative {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}
