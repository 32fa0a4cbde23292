//! Points and point sets.

use std::collections::HashSet;
use std::fmt;

use shamrock_integers::{Integer, Rational};

use crate::coefficients::CoefficientVector;
use crate::error::InterpolationError;
use crate::{lagrange, vandermonde};

/// A single share: the polynomial takes value `y` at abscissa `x`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Abscissa.
    pub x: Integer,
    /// Ordinate.
    pub y: Integer,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: Integer, y: Integer) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(Integer::new(x), Integer::new(y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The ordered points of one reconstruction.
///
/// A point set determines a unique polynomial of degree `len() - 1` when
/// its abscissae are pairwise distinct. Construction does not enforce
/// this: each algorithm reports the singularity in its own terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps the given points, preserving their order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Picks the `k` points with the smallest abscissae, in ascending order.
    ///
    /// The sort is stable, so among the candidates the original order is
    /// kept. Two candidates sharing an abscissa are rejected rather than
    /// tie-broken.
    ///
    /// # Errors
    ///
    /// - [`InterpolationError::Empty`] when `k` is zero.
    /// - [`InterpolationError::DuplicateAbscissa`] when two candidates share `x`.
    /// - [`InterpolationError::InsufficientPoints`] when fewer than `k` are given.
    pub fn select_smallest(mut candidates: Vec<Point>, k: usize) -> Result<Self, InterpolationError> {
        if k == 0 {
            return Err(InterpolationError::Empty);
        }
        candidates.sort_by(|a, b| a.x.cmp(&b.x));
        if let Some(pair) = candidates.windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(InterpolationError::DuplicateAbscissa { x: pair[0].x.clone() });
        }
        if candidates.len() < k {
            return Err(InterpolationError::InsufficientPoints {
                needed: k,
                available: candidates.len(),
            });
        }
        candidates.truncate(k);
        Ok(Self { points: candidates })
    }

    /// Number of points, i.e. the threshold `k`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Degree of the interpolating polynomial, `k - 1`.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// The points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The abscissae in order.
    #[must_use]
    pub fn xs(&self) -> Vec<Integer> {
        self.points.iter().map(|p| p.x.clone()).collect()
    }

    /// Checks that the set is non-empty with pairwise distinct abscissae.
    ///
    /// # Errors
    ///
    /// [`InterpolationError::Empty`] or the first
    /// [`InterpolationError::DuplicateAbscissa`] found in input order.
    pub fn ensure_distinct(&self) -> Result<(), InterpolationError> {
        if self.points.is_empty() {
            return Err(InterpolationError::Empty);
        }
        let mut seen = HashSet::with_capacity(self.points.len());
        for p in &self.points {
            if !seen.insert(&p.x) {
                return Err(InterpolationError::DuplicateAbscissa { x: p.x.clone() });
            }
        }
        Ok(())
    }

    /// Evaluates the interpolant at `t`. See [`lagrange::lagrange_eval`].
    ///
    /// # Errors
    ///
    /// See [`lagrange::lagrange_eval`].
    pub fn lagrange_eval(&self, t: &Integer) -> Result<Rational, InterpolationError> {
        lagrange::lagrange_eval(self, t)
    }

    /// Recovers all coefficients. See [`vandermonde::solve_coefficients`].
    ///
    /// # Errors
    ///
    /// See [`vandermonde::solve_coefficients`].
    pub fn solve_coefficients(&self) -> Result<CoefficientVector, InterpolationError> {
        vandermonde::solve_coefficients(self)
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
