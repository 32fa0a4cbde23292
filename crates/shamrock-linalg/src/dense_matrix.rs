//! Dense matrices over exact rationals.
//!
//! The systems solved here are small (one row per share) and fully dense,
//! so entries are stored contiguously in row-major order.

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use shamrock_integers::{Integer, Rational};
use tracing::trace;

use crate::error::LinalgError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R> DenseMatrix<R> {
    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, LinalgError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(LinalgError::DimensionMismatch {
                    expected: num_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }
}

impl DenseMatrix<Rational> {
    /// Builds the Vandermonde matrix `M[i][j] = xs[i]^j` for `j = 0..xs.len()`.
    ///
    /// Every entry is an integer-valued rational.
    #[must_use]
    pub fn vandermonde(xs: &[Integer]) -> Self {
        let n = xs.len();
        let mut data = Vec::with_capacity(n * n);
        for x in xs {
            let mut power = Integer::one();
            for _ in 0..n {
                data.push(Rational::from_integer(power.clone()));
                power = power * x;
            }
        }
        Self {
            data,
            num_rows: n,
            num_cols: n,
        }
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `x` has the wrong length.
    pub fn mv(&self, x: &[Rational]) -> Result<Vec<Rational>, LinalgError> {
        if x.len() != self.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: x.len(),
            });
        }
        Ok((0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(Rational::zero(), |acc, (a, b)| &acc + &(a * b))
            })
            .collect())
    }

    /// Solves the square system `A x = b` by Gaussian elimination.
    ///
    /// For each column the pivot is the first row at or below the diagonal
    /// with a non-zero entry. Over exact rationals magnitude carries no
    /// stability meaning, so only a zero test is made. The pivot row is
    /// scaled so the pivot becomes 1, the column is cleared below it, and
    /// the unit upper-triangular result is back-substituted.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::NotSquare`] for a non-square matrix.
    /// - [`LinalgError::DimensionMismatch`] if `b` has the wrong length.
    /// - [`LinalgError::SingularMatrix`] when a column has no non-zero pivot.
    pub fn solve(&self, b: &[Rational]) -> Result<Vec<Rational>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }
        if b.len() != self.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                found: b.len(),
            });
        }

        let n = self.num_rows;
        let mut m = self.clone();
        let mut rhs = b.to_vec();

        for col in 0..n {
            let pivot_row = (col..n)
                .find(|&row| !m[(row, col)].is_zero())
                .ok_or(LinalgError::SingularMatrix { column: col })?;

            if pivot_row != col {
                trace!(col, pivot_row, "swapping pivot row into place");
                m.swap_rows(col, pivot_row);
                rhs.swap(col, pivot_row);
            }

            // Normalize so the pivot is exactly 1.
            let pivot = m[(col, col)].clone();
            if !pivot.is_one() {
                for k in col..n {
                    m[(col, k)] = m[(col, k)].checked_div(&pivot)?;
                }
                rhs[col] = rhs[col].checked_div(&pivot)?;
            }

            for row in col + 1..n {
                let factor = m[(row, col)].clone();
                if factor.is_zero() {
                    continue;
                }
                for k in col..n {
                    let scaled = &factor * &m[(col, k)];
                    m[(row, k)] = &m[(row, k)] - &scaled;
                }
                let scaled = &factor * &rhs[col];
                rhs[row] = &rhs[row] - &scaled;
            }
        }

        // Unit diagonal: no division needed on the way back up.
        let mut x = vec![Rational::zero(); n];
        for i in (0..n).rev() {
            let mut sum = Rational::zero();
            for j in i + 1..n {
                sum = &sum + &(&m[(i, j)] * &x[j]);
            }
            x[i] = &rhs[i] - &sum;
        }
        Ok(x)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
