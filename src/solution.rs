//! The best tour returned by a solver.

use crate::distance::DistanceMatrix;
use std::fmt;

/// A tour together with its closed-loop cost.
///
/// Cities are 0-indexed. The [`Display`](fmt::Display) implementation
/// renders the cost on the first line followed by one 1-indexed city per
/// line.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
/// use u_tsp::Solution;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
/// ]);
/// let solution = Solution::evaluate(vec![0, 1, 2], &dm);
/// assert_eq!(solution.cost, 34);
/// assert_eq!(solution.to_string(), "34\n1\n2\n3\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Visiting order of the cities.
    pub tour: Vec<usize>,
    /// Sum of distances along the closed tour.
    pub cost: u64,
}

impl Solution {
    /// Computes the cost of `tour` and wraps both.
    pub fn evaluate(tour: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let cost = matrix.tour_cost(&tour);
        Self { tour, cost }
    }

    /// Cities as 1-indexed labels, the usual presentation for TSPLIB
    /// instances.
    pub fn one_indexed(&self) -> Vec<usize> {
        self.tour.iter().map(|&c| c + 1).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cost)?;
        for city in self.one_indexed() {
            writeln!(f, "{city}")?;
        }
        Ok(())
    }
}
