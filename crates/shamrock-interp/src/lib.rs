//! # shamrock-interp
//!
//! Exact polynomial reconstruction from points.
//!
//! This crate provides two independent algorithms over exact rationals:
//! - Lagrange evaluation at a chosen abscissa (the primary answer)
//! - Coefficient recovery by solving the Vandermonde system
//!
//! and a cross-validator that reconciles them.
//!
//! ```
//! use shamrock_integers::{Integer, Rational};
//! use shamrock_interp::{lagrange_eval, solve_coefficients, Point, PointSet};
//!
//! let points: PointSet = [(1, 4), (2, 8), (3, 14), (6, 44)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! assert_eq!(lagrange_eval(&points, &Integer::new(0)).unwrap(), Rational::from(2));
//! assert_eq!(solve_coefficients(&points).unwrap().to_string(), "x^2 + x + 2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coefficients;
pub mod error;
pub mod lagrange;
pub mod point;
pub mod vandermonde;
pub mod verify;

#[cfg(test)]
mod proptests;

pub use coefficients::CoefficientVector;
pub use error::InterpolationError;
pub use lagrange::{lagrange_eval, secret};
pub use point::{Point, PointSet};
pub use vandermonde::solve_coefficients;
pub use verify::{
    cross_check, evaluate_by_coefficients, solve_and_verify, verify, verify_reproduces_points,
    CrossCheck, Method, PointMismatch, VerificationReport,
};
