//! Reconstruction settings.

use serde::Deserialize;
use shamrock_integers::{DecodeMode, Integer};

/// Settings for one reconstruction.
///
/// Deserializes from a table where every field is optional; missing
/// fields take the values of [`ReconstructConfig::default`]:
///
/// ```json
/// { "decode_mode": "strict", "target": 0, "check_points": [0, 100], "verify": true }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReconstructConfig {
    /// How share values treat non-digit characters.
    pub decode_mode: DecodeMode,
    /// Replaces the document's `k` when set.
    pub threshold_override: Option<usize>,
    /// Abscissa to evaluate at; zero recovers the secret.
    #[serde(deserialize_with = "de::integer")]
    pub target: Integer,
    /// Abscissae where the Lagrange and coefficient paths must agree.
    #[serde(deserialize_with = "de::integers")]
    pub check_points: Vec<Integer>,
    /// Whether to recover coefficients and cross-validate.
    pub verify: bool,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        Self {
            decode_mode: DecodeMode::Strict,
            threshold_override: None,
            target: Integer::new(0),
            check_points: vec![Integer::new(0), Integer::new(100)],
            verify: true,
        }
    }
}

impl ReconstructConfig {
    /// The threshold to use for a document declaring `k`.
    #[must_use]
    pub fn threshold(&self, document_k: usize) -> usize {
        self.threshold_override.unwrap_or(document_k)
    }
}

/// Integers may be written as JSON numbers or as decimal strings, the
/// latter for values beyond 64 bits.
mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use shamrock_integers::Integer;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Text(String),
    }

    impl Repr {
        fn into_integer<E: Error>(self) -> Result<Integer, E> {
            match self {
                Self::Int(v) => Ok(Integer::new(v)),
                Self::Text(s) => s.trim().parse().map_err(|_| E::custom(format!("invalid integer {s:?}"))),
            }
        }
    }

    pub(super) fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Integer, D::Error> {
        Repr::deserialize(d)?.into_integer()
    }

    pub(super) fn integers<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Integer>, D::Error> {
        Vec::<Repr>::deserialize(d)?
            .into_iter()
            .map(Repr::into_integer)
            .collect()
    }
}
