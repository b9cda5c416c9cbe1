//! Shared fixtures for unit tests.

use crate::distance::{DistanceMatrix, Point};

/// Corners of an axis-aligned square, listed in cyclic order.
pub(crate) fn square(side: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, side),
        Point::new(side, side),
        Point::new(side, 0.0),
    ]
}

/// Distance matrix of the 10-unit square: sides 10, diagonals 14.
pub(crate) fn square_matrix() -> DistanceMatrix {
    DistanceMatrix::from_points(&square(10.0))
}

/// Cities evenly spaced on a circle, listed in cyclic order.
///
/// The optimal tour visits them in index order (or its reverse/rotation).
pub(crate) fn circle(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Scattered cities on a pseudo-random but fixed grid.
pub(crate) fn scattered(n: usize) -> DistanceMatrix {
    let points: Vec<Point> = (0..n)
        .map(|i| Point::new(((i * 37) % 101) as f64, ((i * 53) % 97) as f64))
        .collect();
    DistanceMatrix::from_points(&points)
}
