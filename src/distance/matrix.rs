//! Dense integer distance matrix.

use crate::error::{Result, TspError};

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance rounded to the nearest integer.
    ///
    /// Distances beyond `u64::MAX` saturate; a NaN distance yields 0.
    pub fn rounded_distance_to(&self, other: &Point) -> u64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round() as u64
    }
}

/// A dense n×n matrix of integer distances stored in row-major order.
///
/// Entries are `round(euclidean(i, j))`, the diagonal is zero and the
/// matrix is symmetric. There are no setters: once built, the matrix is
/// shared read-only by every solver.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean distance matrix of the given points.
    ///
    /// # Complexity
    /// O(n²)
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].rounded_distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// The grid must be symmetric with a zero diagonal.
    pub fn from_data(size: usize, data: Vec<u64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TspError::InvalidMatrix(format!(
                "expected {} entries for size {size}, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        if let Some(i) = (0..size).find(|&i| dm.get(i, i) != 0) {
            return Err(TspError::InvalidMatrix(format!(
                "diagonal entry ({i}, {i}) is not zero"
            )));
        }
        if !dm.is_symmetric() {
            return Err(TspError::InvalidMatrix("matrix is not symmetric".into()));
        }
        Ok(dm)
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every city, indexed by city.
    pub fn row(&self, from: usize) -> &[u64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Cost of the closed tour: the sum of consecutive distances plus the
    /// edge from the last city back to the first.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn tour_cost(&self, tour: &[usize]) -> u64 {
        let n = tour.len();
        (0..n)
            .map(|i| self.get(tour[i], tour[(i + 1) % n]))
            .fold(0u64, u64::saturating_add)
    }
}
