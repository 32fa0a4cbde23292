//! End-to-end reconstruction from a share document.

use shamrock_integers::{Integer, Rational};
use shamrock_interp::{
    lagrange_eval, solve_and_verify, CoefficientVector, PointSet, VerificationReport,
};
use tracing::{debug, info};

use crate::config::ReconstructConfig;
use crate::document::ShareDocument;
use crate::error::ShareError;

/// The result of one reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    /// The `k` points actually used, in ascending abscissa order.
    pub selected: PointSet,
    /// Where the interpolant was evaluated.
    pub target: Integer,
    /// The interpolant's exact value at `target`.
    pub value: Rational,
    /// Recovered coefficients, when verification ran.
    pub coefficients: Option<CoefficientVector>,
    /// Cross-validation outcome, when verification ran.
    pub report: Option<VerificationReport>,
}

impl Reconstruction {
    /// The value as an integer, if it is one.
    #[must_use]
    pub fn value_as_integer(&self) -> Option<Integer> {
        self.value.to_integer_if_exact()
    }

    /// False only if verification ran and found a discrepancy.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.report.as_ref().map_or(true, VerificationReport::is_consistent)
    }
}

/// Decodes, selects and reconstructs.
///
/// The Lagrange evaluation at `config.target` is the answer. With
/// `config.verify` set the coefficients are also recovered and both paths
/// are cross-checked at `config.check_points`; a failed check is reported
/// in [`Reconstruction::report`], not returned as an error.
///
/// # Errors
///
/// Decode errors, insufficient or duplicate shares, and singular systems.
pub fn reconstruct(
    document: &ShareDocument,
    config: &ReconstructConfig,
) -> Result<Reconstruction, ShareError> {
    let k = config.threshold(document.k);
    let candidates = document.points(config.decode_mode)?;
    let selected = PointSet::select_smallest(candidates, k)?;
    debug!(k, xs = ?selected.xs(), "selected shares");

    let value = lagrange_eval(&selected, &config.target)?;
    info!(at = %config.target, %value, "reconstructed");

    let (coefficients, report) = if config.verify {
        let (coefficients, report) = solve_and_verify(&selected, &config.check_points)?;
        (Some(coefficients), Some(report))
    } else {
        (None, None)
    };

    Ok(Reconstruction {
        selected,
        target: config.target.clone(),
        value,
        coefficients,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shamrock_integers::DecodeMode;
    use shamrock_interp::InterpolationError;

    const QUADRATIC: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "6": { "base": "10", "value": "44" },
        "1": { "base": "10", "value": "4" },
        "3": { "base": "16", "value": "e" },
        "2": { "base": "2", "value": "1000" }
    }"#;

    #[test]
    fn test_reconstruct_secret() {
        let doc = ShareDocument::from_json_str(QUADRATIC).unwrap();
        let result = reconstruct(&doc, &ReconstructConfig::default()).unwrap();

        assert_eq!(result.value_as_integer(), Some(Integer::new(2)));
        assert_eq!(result.selected.xs(), vec![Integer::new(1), Integer::new(2), Integer::new(3)]);
        assert!(result.is_consistent());
        assert_eq!(result.coefficients.unwrap().to_string(), "x^2 + x + 2");
    }

    #[test]
    fn test_threshold_override_and_target() {
        let doc = ShareDocument::from_json_str(QUADRATIC).unwrap();
        let config = ReconstructConfig {
            threshold_override: Some(4),
            target: Integer::new(10),
            verify: false,
            ..ReconstructConfig::default()
        };
        let result = reconstruct(&doc, &config).unwrap();
        assert_eq!(result.selected.len(), 4);
        assert_eq!(result.value, Rational::from(112));
        assert!(result.coefficients.is_none());
        assert!(result.report.is_none());
        assert!(result.is_consistent());
    }

    #[test]
    fn test_insufficient_shares() {
        let doc = ShareDocument::from_json_str(QUADRATIC).unwrap();
        let config = ReconstructConfig {
            threshold_override: Some(5),
            ..ReconstructConfig::default()
        };
        let err = reconstruct(&doc, &config).unwrap_err();
        assert!(matches!(
            err,
            ShareError::Interpolation(InterpolationError::InsufficientPoints { needed: 5, available: 4 })
        ));
    }

    #[test]
    fn test_equivalent_keys_are_duplicates() {
        let doc = ShareDocument::from_json_str(
            r#"{ "keys": { "k": 2 }, "1": { "base": "10", "value": "3" }, "01": { "base": "10", "value": "4" } }"#,
        )
        .unwrap();
        let err = reconstruct(&doc, &ReconstructConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ShareError::Interpolation(InterpolationError::DuplicateAbscissa { .. })
        ));
    }

    #[test]
    fn test_lenient_mode_is_opt_in() {
        let doc = ShareDocument::from_json_str(
            r#"{ "keys": { "k": 1 }, "1": { "base": "10", "value": "4 2" } }"#,
        )
        .unwrap();
        assert!(matches!(
            reconstruct(&doc, &ReconstructConfig::default()),
            Err(ShareError::Decode { .. })
        ));

        let lenient = ReconstructConfig {
            decode_mode: DecodeMode::Lenient,
            ..ReconstructConfig::default()
        };
        assert_eq!(reconstruct(&doc, &lenient).unwrap().value, Rational::from(42));
    }
}
