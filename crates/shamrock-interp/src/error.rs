//! Interpolation errors.

use shamrock_integers::{ArithmeticError, Integer};
use shamrock_linalg::LinalgError;
use thiserror::Error;

/// Errors that can occur while reconstructing a polynomial from points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// No points, or a threshold of zero.
    #[error("cannot interpolate through an empty point set")]
    Empty,

    /// Two points share an abscissa, so no unique interpolant exists.
    #[error("singular interpolation: abscissa {x} appears more than once")]
    DuplicateAbscissa {
        /// The repeated abscissa.
        x: Integer,
    },

    /// Fewer candidate points than the threshold.
    #[error("need {needed} points, only {available} available")]
    InsufficientPoints {
        /// The threshold `k`.
        needed: usize,
        /// Candidates supplied.
        available: usize,
    },

    /// The Vandermonde system could not be solved.
    #[error("coefficient recovery failed: {0}")]
    Linalg(#[from] LinalgError),

    /// Rational arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl InterpolationError {
    /// Returns true if the points admit no unique interpolant, whichever
    /// algorithm detected it.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAbscissa { .. } | Self::Linalg(LinalgError::SingularMatrix { .. })
        )
    }
}
