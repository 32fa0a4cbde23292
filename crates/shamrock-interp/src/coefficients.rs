//! Polynomials in coefficient form.

use std::fmt;

use num_traits::{One, Zero};
use shamrock_integers::{Integer, Rational};

/// Polynomial coefficients in ascending degree order: index `j` holds the
/// coefficient of `x^j`.
///
/// Trailing zeros are kept, so `len()` is always the number of points the
/// vector was recovered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefficientVector {
    coeffs: Vec<Rational>,
}

impl CoefficientVector {
    /// Wraps coefficients given in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<Rational>) -> Self {
        Self { coeffs }
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Index of the highest non-zero coefficient; zero for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
    }

    /// Returns the coefficient of x^j.
    #[must_use]
    pub fn coeff(&self, j: usize) -> Rational {
        self.coeffs.get(j).cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// The constant term, `P(0)`.
    #[must_use]
    pub fn constant_term(&self) -> Rational {
        self.coeff(0)
    }

    /// Evaluates the polynomial at `t` using Horner's method.
    #[must_use]
    pub fn eval(&self, t: &Integer) -> Rational {
        let t = Rational::from_integer(t.clone());
        let mut result = Rational::zero();
        for c in self.coeffs.iter().rev() {
            result = &(&result * &t) + c;
        }
        result
    }
}

impl From<Vec<Rational>> for CoefficientVector {
    fn from(coeffs: Vec<Rational>) -> Self {
        Self::new(coeffs)
    }
}

impl fmt::Display for CoefficientVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (j, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            match (first, c.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let magnitude = c.abs();
            match j {
                0 => write!(f, "{magnitude}")?,
                _ if magnitude.is_one() => {}
                _ if magnitude.is_integer() => write!(f, "{magnitude}*")?,
                _ => write!(f, "({magnitude})*")?,
            }
            match j {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{j}")?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
