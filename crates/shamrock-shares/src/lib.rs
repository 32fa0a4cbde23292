//! # shamrock-shares
//!
//! From a share document to a verified secret.
//!
//! This crate provides:
//! - The JSON share document format and its strict/lenient decoding
//! - Deterministic selection of the `k` smallest-abscissa shares
//! - The reconstruction pipeline with cross-validation
//! - Agreement checks across every `k`-subset of the shares

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod document;
pub mod error;
pub mod reconstruct;
pub mod subsets;

#[cfg(test)]
mod proptests;

pub use config::ReconstructConfig;
pub use document::{EncodedShare, ShareDocument};
pub use error::ShareError;
pub use reconstruct::{reconstruct, Reconstruction};
pub use subsets::{subset_count, subsets_agree, SubsetAgreement};
