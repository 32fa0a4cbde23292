//! Radix decoding of share values.
//!
//! Share values arrive as digit strings in a base between 2 and 36.
//! Digits are `0-9` then `a-z` (case-insensitive) for 10 through 35.
//! Leading and trailing whitespace is trimmed, then the digits are folded
//! left to right with Horner's rule: `acc = acc * base + digit`. An empty
//! string decodes to zero.
//!
//! Two variants exist and callers pick one per use site:
//!
//! - [`decode_strict`] rejects any character that is not a digit.
//! - [`decode_lenient`] skips characters that are not digits in any base
//!   (punctuation, separators, interior whitespace). A real digit that is
//!   too large for the base is still an error in both variants.

use num_traits::Zero;

use crate::error::DecodeError;
use crate::Integer;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// How to treat characters that are not digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecodeMode {
    /// Any non-digit character is an [`DecodeError::InvalidDigit`].
    #[default]
    Strict,
    /// Non-digit characters are skipped.
    Lenient,
}

/// Returns the value of `ch` as a base-36 digit, if it is one.
#[must_use]
pub fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(36)
}

/// Decodes `s` in the given base, rejecting every non-digit character.
///
/// # Errors
///
/// [`DecodeError::InvalidBase`] for a base outside `2..=36`, and
/// [`DecodeError::InvalidDigit`] for the first character that is not a
/// digit below `base`.
pub fn decode_strict(s: &str, base: u32) -> Result<Integer, DecodeError> {
    decode(s, base, DecodeMode::Strict)
}

/// Decodes `s` in the given base, skipping characters that are not digits.
///
/// # Errors
///
/// [`DecodeError::InvalidBase`] for a base outside `2..=36`, and
/// [`DecodeError::InvalidDigit`] for a digit whose value is not below `base`.
pub fn decode_lenient(s: &str, base: u32) -> Result<Integer, DecodeError> {
    decode(s, base, DecodeMode::Lenient)
}

/// Decodes `s` in the given base with an explicit [`DecodeMode`].
///
/// # Errors
///
/// See [`decode_strict`] and [`decode_lenient`].
pub fn decode(s: &str, base: u32, mode: DecodeMode) -> Result<Integer, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase(base));
    }

    let radix = Integer::from(base);
    let mut acc = Integer::zero();
    for (position, ch) in s.trim().chars().enumerate() {
        let digit = match (digit_value(ch), mode) {
            (Some(d), _) if d < base => d,
            (None, DecodeMode::Lenient) => continue,
            _ => return Err(DecodeError::InvalidDigit { ch, position, base }),
        };
        acc = acc * &radix + Integer::from(digit);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_binary() {
        assert_eq!(decode_strict("ff", 16).unwrap(), Integer::new(255));
        assert_eq!(decode_strict("FF", 16).unwrap(), Integer::new(255));
        assert_eq!(decode_strict("1010", 2).unwrap(), Integer::new(10));
        assert_eq!(decode_strict("zz", 36).unwrap(), Integer::new(1295));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(decode_strict("  39\n", 10).unwrap(), Integer::new(39));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(decode_strict("", 10).unwrap(), Integer::zero());
        assert_eq!(decode_strict("   ", 7).unwrap(), Integer::zero());
        assert_eq!(decode_lenient("-_-", 10).unwrap(), Integer::zero());
    }

    #[test]
    fn test_digit_out_of_range() {
        let err = decode_strict("129", 8).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidDigit {
                ch: '9',
                position: 2,
                base: 8
            }
        );
        // Lenient decoding only skips non-digits; '2' is a digit.
        assert!(decode_lenient("102", 2).is_err());
    }

    #[test]
    fn test_strict_rejects_separators() {
        assert!(matches!(
            decode_strict("1_000", 10),
            Err(DecodeError::InvalidDigit { ch: '_', position: 1, .. })
        ));
        assert!(decode_strict("12 34", 10).is_err());
    }

    #[test]
    fn test_lenient_skips_separators() {
        assert_eq!(decode_lenient("1_000", 10).unwrap(), Integer::new(1000));
        assert_eq!(decode_lenient("de:ad be:ef", 16).unwrap(), Integer::from(0xdead_beef_u64));
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(decode_strict("1", 1), Err(DecodeError::InvalidBase(1)));
        assert_eq!(decode_lenient("1", 37), Err(DecodeError::InvalidBase(37)));
    }

    #[test]
    fn test_long_value() {
        let s = "aed7015a346d635";
        let expected = Integer::from_str_radix(s, 16).unwrap();
        assert_eq!(decode_strict(s, 16).unwrap(), expected);

        let big = "7".repeat(300);
        let expected = Integer::from_str_radix(&big, 10).unwrap();
        assert_eq!(decode_strict(&big, 10).unwrap(), expected);
    }
}
