//! The JSON share document.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "16", "value": "c" }
//! }
//! ```
//!
//! Every entry whose key is a non-negative decimal integer is a share with
//! that key as its abscissa. Other entries are ignored. `n` is informational
//! and `k` is the threshold. Both, and each `base` and `value`, may be
//! written as an integral JSON number or a string.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use shamrock_integers::{decode, decode_strict, DecodeMode, Integer};
use shamrock_interp::Point;
use tracing::{debug, warn};

use crate::error::ShareError;

#[derive(Deserialize)]
struct RawDocument {
    keys: RawKeys,
    #[serde(flatten)]
    entries: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawKeys {
    #[serde(default)]
    n: Option<Value>,
    k: Value,
}

#[derive(Deserialize)]
struct RawShare {
    base: Value,
    value: Value,
}

/// One share as written in the document, not yet decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    /// The entry key, as written.
    pub key: String,
    /// Abscissa parsed from the key.
    pub x: Integer,
    /// Declared base of `value`.
    pub base: u32,
    /// Digit string in `base`.
    pub value: String,
}

impl EncodedShare {
    /// Decodes the value into a point.
    ///
    /// # Errors
    ///
    /// [`ShareError::Decode`] if the value is not a numeral in its base.
    pub fn decode(&self, mode: DecodeMode) -> Result<Point, ShareError> {
        let y = decode(&self.value, self.base, mode).map_err(|source| ShareError::Decode {
            key: self.key.clone(),
            source,
        })?;
        Ok(Point::new(self.x.clone(), y))
    }
}

/// A parsed share document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDocument {
    /// Declared number of shares, if given.
    pub n: Option<usize>,
    /// Threshold: the number of points that determine the polynomial.
    pub k: usize,
    /// Shares, ordered by key.
    pub shares: Vec<EncodedShare>,
}

impl ShareDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// [`ShareError::Json`] for invalid JSON or a missing `keys.k`, and
    /// [`ShareError::InvalidKeys`], [`ShareError::InvalidBase`] or
    /// [`ShareError::MalformedShare`] for badly typed fields.
    pub fn from_json_str(json: &str) -> Result<Self, ShareError> {
        let raw: RawDocument = serde_json::from_str(json)?;

        let n = raw.keys.n.as_ref().map(|v| count("n", v)).transpose()?;
        let k = count("k", &raw.keys.k)?;

        let mut shares = Vec::new();
        for (key, entry) in raw.entries {
            if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
                debug!(%key, "ignoring non-share entry");
                continue;
            }
            // Derived struct deserializers also accept sequences.
            if !entry.is_object() {
                return Err(ShareError::MalformedShare { key });
            }
            let share: RawShare = serde_json::from_value(entry)
                .map_err(|_| ShareError::MalformedShare { key: key.clone() })?;
            let base_text = scalar_text(&share.base).unwrap_or_else(|| share.base.to_string());
            let base = base_text
                .trim()
                .parse::<u32>()
                .map_err(|_| ShareError::InvalidBase {
                    key: key.clone(),
                    base: base_text.clone(),
                })?;
            let value = scalar_text(&share.value)
                .ok_or_else(|| ShareError::MalformedShare { key: key.clone() })?;
            let x = decode_strict(&key, 10).map_err(|source| ShareError::Decode {
                key: key.clone(),
                source,
            })?;
            shares.push(EncodedShare { key, x, base, value });
        }

        if let Some(n) = n {
            if n != shares.len() {
                warn!(declared = n, found = shares.len(), "share count differs from keys.n");
            }
        }
        debug!(k, shares = shares.len(), "parsed share document");
        Ok(Self { n, k, shares })
    }

    /// Reads and parses a document from a file.
    ///
    /// # Errors
    ///
    /// [`ShareError::Io`] if the file cannot be read, otherwise as
    /// [`ShareDocument::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ShareError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ShareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Decodes every share into a point, in document order.
    ///
    /// # Errors
    ///
    /// The first [`ShareError::Decode`] encountered.
    pub fn points(&self, mode: DecodeMode) -> Result<Vec<Point>, ShareError> {
        self.shares.iter().map(|s| s.decode(mode)).collect()
    }
}

/// Text of a JSON string or integral number; `None` for other kinds.
///
/// Floats are refused: `1e3` would print as `1000.0`, which no longer reads
/// as the intended numeral.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}

fn count(field: &'static str, value: &Value) -> Result<usize, ShareError> {
    let invalid = || ShareError::InvalidKeys {
        field,
        value: value.to_string(),
    };
    scalar_text(value)
        .and_then(|text| text.trim().parse::<usize>().ok())
        .ok_or_else(invalid)
}
