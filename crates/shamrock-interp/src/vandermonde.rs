//! Coefficient recovery through the Vandermonde system.
//!
//! Solving `V a = y` with `V[i][j] = x_i^j` yields every coefficient of the
//! interpolant. This path is independent of [`crate::lagrange`] and is used
//! to cross-check it.

use shamrock_integers::Rational;
use shamrock_linalg::DenseMatrix;
use tracing::debug;

use crate::coefficients::CoefficientVector;
use crate::error::InterpolationError;
use crate::point::PointSet;

/// Recovers the `k` coefficients of the interpolant of `points`.
///
/// Duplicate abscissae are not pre-checked here; they surface from the
/// elimination as [`shamrock_linalg::LinalgError::SingularMatrix`].
///
/// # Errors
///
/// [`InterpolationError::Empty`] for an empty set and
/// [`InterpolationError::Linalg`] when the system is singular.
pub fn solve_coefficients(points: &PointSet) -> Result<CoefficientVector, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::Empty);
    }
    debug!(k = points.len(), "solving vandermonde system");

    let matrix = DenseMatrix::vandermonde(&points.xs());
    let rhs: Vec<Rational> = points
        .iter()
        .map(|p| Rational::from_integer(p.y.clone()))
        .collect();

    Ok(CoefficientVector::new(matrix.solve(&rhs)?))
}
