//! Error types for decoding and exact arithmetic.

use thiserror::Error;

/// Errors raised while decoding a share value from its digit string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The declared base is outside `2..=36`.
    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    /// A character is not a digit, or its value is not below the base.
    #[error("invalid digit {ch:?} at position {position} for base {base}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character offset within the trimmed input.
        position: usize,
        /// The declared base.
        base: u32,
    },
}

/// Errors raised by rational arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A rational was built or divided with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}
