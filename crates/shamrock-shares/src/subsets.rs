//! Threshold agreement across share subsets.
//!
//! With more than `k` shares, every `k`-subset of shares drawn from one
//! degree-`k - 1` polynomial reconstructs the same value. Checking that
//! distinguishes a consistent share set from one with corrupted shares,
//! independently of which `k` shares the default selection picks.
//!
//! The number of subsets grows as `C(n, k)`, so callers pass a limit.
//! Subsets are evaluated in parallel with rayon; each evaluation is
//! independent and shares no state.

use rayon::prelude::*;
use shamrock_integers::{Integer, Rational};
use shamrock_interp::{lagrange_eval, InterpolationError, Point, PointSet};
use tracing::{debug, warn};

use crate::error::ShareError;

/// Values reconstructed from every `k`-subset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubsetAgreement {
    /// Number of subsets evaluated.
    pub subsets: usize,
    /// Distinct values seen, each with the number of subsets producing it,
    /// most frequent first.
    pub values: Vec<(Rational, usize)>,
}

impl SubsetAgreement {
    /// True when every subset produced the same value.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.values.len() <= 1
    }

    /// The value produced by the most subsets.
    #[must_use]
    pub fn majority(&self) -> Option<&Rational> {
        self.values.first().map(|(v, _)| v)
    }
}

/// Number of `k`-subsets of `n` items, saturating at `u128::MAX`.
///
/// Saturation happens only when `C(n, k)` itself exceeds `u128::MAX`.
#[must_use]
pub fn subset_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc = C(n, i). Cancelling gcd(acc, i + 1) first leaves (i + 1) / g
        // dividing n - i, so the product is exactly C(n, i + 1).
        let divisor = i as u128 + 1;
        let g = gcd(acc, divisor);
        let factor = (n - i) as u128 / (divisor / g);
        let Some(next) = (acc / g).checked_mul(factor) else {
            return u128::MAX;
        };
        acc = next;
    }
    acc
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Index combinations of `k` out of `n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Evaluates every `k`-subset of `candidates` at `t` and tallies the results.
///
/// # Errors
///
/// - [`ShareError::TooManySubsets`] if `C(n, k)` exceeds `limit`.
/// - [`InterpolationError::Empty`] for `k == 0` and
///   [`InterpolationError::InsufficientPoints`] for `k > n`.
/// - [`InterpolationError::DuplicateAbscissa`] if candidates share an abscissa.
pub fn subsets_agree(
    candidates: &[Point],
    k: usize,
    t: &Integer,
    limit: u128,
) -> Result<SubsetAgreement, ShareError> {
    if k == 0 {
        return Err(InterpolationError::Empty.into());
    }
    if k > candidates.len() {
        return Err(InterpolationError::InsufficientPoints {
            needed: k,
            available: candidates.len(),
        }
        .into());
    }
    PointSet::new(candidates.to_vec()).ensure_distinct()?;

    let count = subset_count(candidates.len(), k);
    if count > limit {
        return Err(ShareError::TooManySubsets { count, limit });
    }

    let combos = combinations(candidates.len(), k);
    debug!(n = candidates.len(), k, subsets = combos.len(), "evaluating subsets");

    let results = combos
        .par_iter()
        .map(|combo| {
            let subset: PointSet = combo.iter().map(|&i| candidates[i].clone()).collect();
            lagrange_eval(&subset, t)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut values: Vec<(Rational, usize)> = Vec::new();
    for value in results {
        match values.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => values.push((value, 1)),
        }
    }
    values.sort_by(|a, b| b.1.cmp(&a.1));

    let agreement = SubsetAgreement {
        subsets: combos.len(),
        values,
    };
    if !agreement.agrees() {
        warn!(distinct = agreement.values.len(), "share subsets disagree");
    }
    Ok(agreement)
}
