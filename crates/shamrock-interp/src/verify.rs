//! Cross-validation of the two reconstruction paths.
//!
//! The Lagrange evaluator and the Vandermonde solver share no code beyond
//! rational arithmetic. Agreement between them at arbitrary abscissae, plus
//! exact reproduction of every input point by both, rules out construction
//! and elimination errors.
//!
//! Mismatches are reported, not raised. Every check runs even after a
//! mismatch is found, so one report shows all discrepancies.

use std::fmt;

use shamrock_integers::{Integer, Rational};
use tracing::{debug, warn};

use crate::coefficients::CoefficientVector;
use crate::error::InterpolationError;
use crate::lagrange::lagrange_eval;
use crate::point::PointSet;
use crate::vandermonde::solve_coefficients;

/// Which evaluator produced a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Direct Lagrange evaluation from the points.
    Lagrange,
    /// Horner evaluation of the recovered coefficients.
    Coefficients,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lagrange => write!(f, "lagrange"),
            Self::Coefficients => write!(f, "coefficients"),
        }
    }
}

/// An input point that an evaluator failed to reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointMismatch {
    /// The evaluator that disagreed.
    pub method: Method,
    /// Abscissa of the point.
    pub x: Integer,
    /// The supplied ordinate.
    pub expected: Integer,
    /// What the evaluator returned.
    pub actual: Rational,
}

/// Both evaluators at one abscissa.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossCheck {
    /// Evaluation point.
    pub t: Integer,
    /// Value from [`lagrange_eval`].
    pub lagrange: Rational,
    /// Value from [`CoefficientVector::eval`].
    pub coefficients: Rational,
}

impl CrossCheck {
    /// True when both paths produced the same value.
    ///
    /// Both sides are canonical, so field equality is value equality.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.lagrange == self.coefficients
    }
}

/// Outcome of a full verification pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Number of (point, evaluator) pairs checked.
    pub points_checked: usize,
    /// Every failed point reproduction.
    pub mismatches: Vec<PointMismatch>,
    /// Every cross-check, agreeing or not.
    pub cross_checks: Vec<CrossCheck>,
}

impl VerificationReport {
    /// True if all points were reproduced and all cross-checks agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty() && self.cross_checks.iter().all(CrossCheck::agrees)
    }

    /// Cross-checks where the two paths disagree.
    pub fn disagreements(&self) -> impl Iterator<Item = &CrossCheck> {
        self.cross_checks.iter().filter(|c| !c.agrees())
    }
}

/// Evaluates coefficients at `t`: `Σ_j a_j · t^j`.
#[must_use]
pub fn evaluate_by_coefficients(coeffs: &CoefficientVector, t: &Integer) -> Rational {
    coeffs.eval(t)
}

/// Checks that `evaluator(x) == y` exactly for every point.
///
/// Returns one [`PointMismatch`] per failing point, tagged with `method`.
///
/// # Errors
///
/// Propagates the first evaluator error. With a valid point set an
/// evaluator error indicates a bug rather than bad input.
pub fn verify_reproduces_points<F>(
    points: &PointSet,
    method: Method,
    mut evaluator: F,
) -> Result<Vec<PointMismatch>, InterpolationError>
where
    F: FnMut(&Integer) -> Result<Rational, InterpolationError>,
{
    let mut mismatches = Vec::new();
    for p in points {
        let actual = evaluator(&p.x)?;
        if actual.to_integer_if_exact().as_ref() != Some(&p.y) {
            warn!(%method, x = %p.x, expected = %p.y, %actual, "point not reproduced");
            mismatches.push(PointMismatch {
                method,
                x: p.x.clone(),
                expected: p.y.clone(),
                actual,
            });
        }
    }
    Ok(mismatches)
}

/// Evaluates `t` through both paths.
///
/// # Errors
///
/// See [`lagrange_eval`].
pub fn cross_check(
    points: &PointSet,
    coeffs: &CoefficientVector,
    t: &Integer,
) -> Result<CrossCheck, InterpolationError> {
    let check = CrossCheck {
        t: t.clone(),
        lagrange: lagrange_eval(points, t)?,
        coefficients: evaluate_by_coefficients(coeffs, t),
    };
    if !check.agrees() {
        warn!(t = %check.t, lagrange = %check.lagrange, coefficients = %check.coefficients, "paths disagree");
    }
    Ok(check)
}

/// Runs the complete verification for one point set.
///
/// Both evaluators must reproduce every point, and both must agree at
/// every abscissa in `check_points`.
///
/// # Errors
///
/// Errors from either reconstruction path, e.g. a singular point set.
pub fn verify(
    points: &PointSet,
    coeffs: &CoefficientVector,
    check_points: &[Integer],
) -> Result<VerificationReport, InterpolationError> {
    let mut mismatches = verify_reproduces_points(points, Method::Lagrange, |x| lagrange_eval(points, x))?;
    mismatches.extend(verify_reproduces_points(points, Method::Coefficients, |x| {
        Ok(evaluate_by_coefficients(coeffs, x))
    })?);

    let cross_checks = check_points
        .iter()
        .map(|t| cross_check(points, coeffs, t))
        .collect::<Result<Vec<_>, _>>()?;

    let report = VerificationReport {
        points_checked: 2 * points.len(),
        mismatches,
        cross_checks,
    };
    debug!(
        consistent = report.is_consistent(),
        mismatches = report.mismatches.len(),
        "verification finished"
    );
    Ok(report)
}

/// Solves for coefficients and verifies them in one step.
///
/// # Errors
///
/// See [`solve_coefficients`] and [`verify`].
pub fn solve_and_verify(
    points: &PointSet,
    check_points: &[Integer],
) -> Result<(CoefficientVector, VerificationReport), InterpolationError> {
    let coeffs = solve_coefficients(points)?;
    let report = verify(points, &coeffs, check_points)?;
    Ok((coeffs, report))
}
