//! Direct Lagrange evaluation.
//!
//! Evaluates the interpolating polynomial at a single abscissa without
//! materializing its coefficients:
//!
//! ```text
//! P(t) = Σ_i y_i · Π_{j≠i} (t − x_j) / (x_i − x_j)
//! ```
//!
//! Each basis term starts at `y_i` and is multiplied by one reduced factor
//! at a time, so the running term never holds an unreduced product.

use num_traits::Zero;
use shamrock_integers::{Integer, Rational};
use tracing::debug;

use crate::error::InterpolationError;
use crate::point::PointSet;

/// Evaluates the unique degree-`k - 1` interpolant of `points` at `t`.
///
/// # Errors
///
/// [`InterpolationError::Empty`] for an empty set and
/// [`InterpolationError::DuplicateAbscissa`] when two points share an
/// abscissa. Both are checked before any arithmetic.
pub fn lagrange_eval(points: &PointSet, t: &Integer) -> Result<Rational, InterpolationError> {
    points.ensure_distinct()?;
    debug!(k = points.len(), %t, "lagrange evaluation");

    let mut total = Rational::zero();
    for (i, pi) in points.iter().enumerate() {
        if pi.y.is_zero() {
            continue;
        }
        let mut term = Rational::from_integer(pi.y.clone());
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let factor = Rational::reduce(t - &pj.x, &pi.x - &pj.x)?;
            term = &term * &factor;
            if term.is_zero() {
                break;
            }
        }
        total = &total + &term;
    }
    Ok(total)
}

/// Evaluates the interpolant at zero, i.e. recovers the shared secret.
///
/// # Errors
///
/// See [`lagrange_eval`].
pub fn secret(points: &PointSet) -> Result<Rational, InterpolationError> {
    lagrange_eval(points, &Integer::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn set(pairs: &[(i64, i64)]) -> PointSet {
        pairs.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_quadratic_secret() {
        // P(x) = x^2 + x + 2
        let points = set(&[(1, 4), (2, 8), (3, 14), (6, 44)]);
        assert_eq!(secret(&points).unwrap(), Rational::from(2));
        assert_eq!(lagrange_eval(&points, &Integer::new(10)).unwrap(), Rational::from(112));
    }

    #[test]
    fn test_overdetermined_degree() {
        // Four points on x^2 + 3: the cubic term vanishes.
        let points = set(&[(1, 4), (2, 7), (3, 12), (6, 39)]);
        assert_eq!(secret(&points).unwrap(), Rational::from(3));
    }

    #[test]
    fn test_constant_polynomial() {
        let points = set(&[(1, 3), (2, 3)]);
        assert_eq!(secret(&points).unwrap(), Rational::from(3));
        assert_eq!(lagrange_eval(&points, &Integer::new(100)).unwrap(), Rational::from(3));
    }

    #[test]
    fn test_rational_result() {
        // Line through (1, 0) and (3, 1): P(0) = -1/2
        let points = set(&[(1, 0), (3, 1)]);
        assert_eq!(secret(&points).unwrap(), Rational::from_i64(-1, 2).unwrap());
    }

    #[test]
    fn test_reproduces_points() {
        let points = set(&[(-4, 17), (0, -2), (5, 1), (9, 100)]);
        for p in &points {
            assert_eq!(lagrange_eval(&points, &p.x).unwrap(), Rational::from_integer(p.y.clone()));
        }
    }

    #[test]
    fn test_single_point() {
        let points = set(&[(7, 42)]);
        assert_eq!(secret(&points).unwrap(), Rational::from(42));
    }

    #[test]
    fn test_duplicate_abscissa() {
        let points = set(&[(1, 4), (2, 7), (1, 5)]);
        let err = secret(&points).unwrap_err();
        assert_eq!(err, InterpolationError::DuplicateAbscissa { x: Integer::new(1) });
        assert!(err.is_singular());
    }

    #[test]
    fn test_empty() {
        assert_eq!(secret(&PointSet::new(Vec::new())), Err(InterpolationError::Empty));
    }
}
