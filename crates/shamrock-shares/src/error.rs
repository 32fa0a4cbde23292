//! Errors for loading shares and running a reconstruction.

use std::path::PathBuf;

use shamrock_integers::DecodeError;
use shamrock_interp::InterpolationError;
use thiserror::Error;

/// Errors raised between reading a share document and producing a result.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The document file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The document is not valid JSON or lacks the `keys` object.
    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),

    /// `keys.n` or `keys.k` is not a non-negative integer.
    #[error("invalid `{field}` in keys: {value}")]
    InvalidKeys {
        /// `"n"` or `"k"`.
        field: &'static str,
        /// The rejected value as written.
        value: String,
    },

    /// A share declares a base that is not an integer.
    #[error("share {key}: invalid base {base:?}")]
    InvalidBase {
        /// Share key.
        key: String,
        /// The rejected base as written.
        base: String,
    },

    /// A share entry is not a `{ base, value }` object.
    #[error("share {key}: expected an object with `base` and `value`")]
    MalformedShare {
        /// Share key.
        key: String,
    },

    /// A share value failed to decode in its declared base.
    #[error("share {key}: {source}")]
    Decode {
        /// Share key.
        key: String,
        /// Underlying error.
        source: DecodeError,
    },

    /// Enumerating every k-subset would exceed the caller's limit.
    #[error("{count} subsets exceed the limit of {limit}")]
    TooManySubsets {
        /// Number of k-subsets, saturated at `u128::MAX`.
        count: u128,
        /// Caller-supplied limit.
        limit: u128,
    },

    /// Selection or reconstruction failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
