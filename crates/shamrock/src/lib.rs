//! # Shamrock
//!
//! Exact reconstruction of Shamir-shared secrets.
//!
//! Given `k` shares `(x, y)` of a degree-`k - 1` polynomial, with each `y`
//! written in a base between 2 and 36, Shamrock recovers `P(0)` exactly
//! over the rationals. No modular or floating-point arithmetic is involved.
//!
//! ## Features
//!
//! - **Exact arithmetic**: Arbitrary precision integers and canonical rationals
//! - **Two algorithms**: Direct Lagrange evaluation and Vandermonde elimination
//! - **Cross-validation**: Both paths must agree and reproduce every share
//! - **Share documents**: JSON input with strict or lenient radix decoding
//!
//! ## Quick Start
//!
//! ```
//! use shamrock::prelude::*;
//!
//! let doc = ShareDocument::from_json_str(r#"{
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "3" },
//!     "2": { "base": "2", "value": "11" },
//!     "4": { "base": "16", "value": "3" }
//! }"#).unwrap();
//!
//! let result = reconstruct(&doc, &ReconstructConfig::default()).unwrap();
//! assert_eq!(result.value_as_integer(), Some(Integer::new(3)));
//! assert!(result.is_consistent());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use shamrock_integers as integers;
pub use shamrock_interp as interp;
pub use shamrock_linalg as linalg;
pub use shamrock_shares as shares;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use shamrock_integers::{decode_lenient, decode_strict, DecodeMode, Integer, Rational};
    pub use shamrock_interp::{
        lagrange_eval, secret, solve_coefficients, verify, CoefficientVector, InterpolationError,
        Point, PointSet, VerificationReport,
    };
    pub use shamrock_linalg::DenseMatrix;
    pub use shamrock_shares::{
        reconstruct, subsets_agree, ReconstructConfig, Reconstruction, ShareDocument, ShareError,
    };
}
