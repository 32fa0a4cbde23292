//! # shamrock-linalg
//!
//! Exact linear algebra for polynomial coefficient recovery.
//!
//! This crate provides:
//! - Dense row-major matrices
//! - Vandermonde matrix construction from share abscissae
//! - Gaussian elimination over `Rational` with zero-test pivoting

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;

pub use dense_matrix::DenseMatrix;
pub use error::LinalgError;
