//! Linear algebra errors.

use shamrock_integers::ArithmeticError;
use thiserror::Error;

/// Errors that can occur while building or solving a linear system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    #[error("matrix is singular: no non-zero pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
