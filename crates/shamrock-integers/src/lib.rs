//! # shamrock-integers
//!
//! Exact number types for secret reconstruction.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Canonical-form rationals (`Rational`), reduced after every operation
//! - Strict and lenient radix decoding of share values (`digits`)
//!
//! No floating point is used anywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digits;
pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use digits::{decode, decode_lenient, decode_strict, DecodeMode};
pub use error::{ArithmeticError, DecodeError};
pub use integer::Integer;
pub use rational::Rational;
