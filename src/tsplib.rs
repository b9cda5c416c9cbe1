//! Reader for TSPLIB instances with `NODE_COORD_SECTION` coordinates.
//!
//! Only what the solvers need is interpreted: the `DIMENSION` header field
//! and the first `DIMENSION` records of the form `index x y`. The coordinate
//! block starts at the first line whose leading token is an integer.
//!
//! ```text
//! NAME: dj38
//! TYPE: TSP
//! DIMENSION: 38
//! EDGE_WEIGHT_TYPE: EUC_2D
//! NODE_COORD_SECTION
//! 1 11003.611100 42102.500000
//! 2 11108.611100 42373.888900
//! ...
//! EOF
//! ```

use crate::distance::Point;
use crate::error::{Result, TspError};
use std::path::Path;

/// Largest accepted coordinate magnitude.
///
/// Keeps every rounded distance, and the cost of any tour over up to a
/// million cities, well inside `u64`.
pub const MAX_COORDINATE: f64 = 1e12;

/// Reads and parses a TSPLIB file.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let input = std::fs::read_to_string(path)?;
    parse(&input)
}

/// Parses TSPLIB text into city coordinates, indexed from 0 in file order.
///
/// # Errors
///
/// - [`TspError::MissingDimension`] if no `DIMENSION` field precedes the
///   coordinate block
/// - [`TspError::Parse`] for a malformed `DIMENSION` value or record, or a
///   coordinate that is not finite or exceeds [`MAX_COORDINATE`]
/// - [`TspError::DimensionMismatch`] if fewer records than announced follow
pub fn parse(input: &str) -> Result<Vec<Point>> {
    let mut dimension: Option<usize> = None;
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    // Header: everything up to the first record.
    let mut first_record = None;
    for (line_no, line) in lines.by_ref() {
        if let Some(rest) = line.strip_prefix("DIMENSION") {
            let value = rest.trim_start().trim_start_matches(':').trim();
            let n = value.parse::<usize>().map_err(|_| TspError::Parse {
                line: line_no,
                message: format!("invalid DIMENSION value `{value}`"),
            })?;
            dimension = Some(n);
        } else if starts_with_integer(line) {
            first_record = Some((line_no, line));
            break;
        }
    }

    let expected = dimension.ok_or(TspError::MissingDimension)?;
    let mut points = Vec::with_capacity(expected);
    if expected == 0 {
        return Ok(points);
    }

    let (line_no, line) = first_record.ok_or(TspError::DimensionMismatch { expected, found: 0 })?;
    points.push(parse_record(line_no, line)?);

    for (line_no, line) in lines {
        if points.len() == expected {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if !starts_with_integer(line) {
            break;
        }
        points.push(parse_record(line_no, line)?);
    }

    if points.len() < expected {
        return Err(TspError::DimensionMismatch {
            expected,
            found: points.len(),
        });
    }
    Ok(points)
}

fn starts_with_integer(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|token| token.parse::<i64>().is_ok())
}

fn parse_record(line_no: usize, line: &str) -> Result<Point> {
    let mut fields = line.split_whitespace().skip(1);
    let mut coordinate = |axis: &str| -> Result<f64> {
        let token = fields.next().ok_or_else(|| TspError::Parse {
            line: line_no,
            message: format!("missing {axis} coordinate"),
        })?;
        let value = token.parse::<f64>().map_err(|_| TspError::Parse {
            line: line_no,
            message: format!("invalid {axis} coordinate `{token}`"),
        })?;
        if !value.is_finite() || value.abs() > MAX_COORDINATE {
            return Err(TspError::Parse {
                line: line_no,
                message: format!("{axis} coordinate `{token}` out of range"),
            });
        }
        Ok(value)
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;
    Ok(Point::new(x, y))
}
