//! Property-based tests for exact arithmetic and radix decoding.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::digits::{decode_lenient, decode_strict};
    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // A base together with a digit string that is valid in it
    fn base_and_digits() -> impl Strategy<Value = (u32, String)> {
        (2u32..=36).prop_flat_map(|base| {
            let digit = (0..base, any::<bool>()).prop_map(|(d, upper)| {
                let ch = char::from_digit(d, 36).unwrap();
                if upper {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            });
            (
                Just(base),
                proptest::collection::vec(digit, 0..80).prop_map(|cs| cs.into_iter().collect()),
            )
        })
    }

    fn is_canonical(r: &Rational) -> bool {
        let (n, d) = (r.numerator(), r.denominator());
        d.is_positive() && n.gcd(d).is_one() && (!n.is_zero() || d.is_one())
    }

    proptest! {
        // Canonical form

        #[test]
        fn reduce_is_canonical(n in any::<i64>(), d in any::<i64>().prop_filter("non-zero", |d| *d != 0)) {
            let r = Rational::reduce(Integer::new(n), Integer::new(d)).unwrap();
            prop_assert!(is_canonical(&r));
            // Value is preserved: n * den == num * d
            prop_assert_eq!(
                Integer::new(n) * r.denominator().clone(),
                r.numerator().clone() * Integer::new(d)
            );
        }

        #[test]
        fn reduce_is_idempotent(r in rational()) {
            let again = Rational::reduce(r.numerator().clone(), r.denominator().clone()).unwrap();
            prop_assert_eq!(again, r);
        }

        #[test]
        fn operations_stay_canonical(a in rational(), b in rational()) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            if !b.is_zero() {
                prop_assert!(is_canonical(&a.checked_div(&b).unwrap()));
            }
        }

        // Field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_sub_then_add(a in rational(), b in rational()) {
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn rational_div_then_mul(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(&q * &b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let product = &a * &a.recip().unwrap();
            prop_assert!(product.is_one());
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        // Radix decoding

        #[test]
        fn decode_matches_dashu_parser((base, digits) in base_and_digits()) {
            let decoded = decode_strict(&digits, base).unwrap();
            let expected = if digits.is_empty() {
                Integer::zero()
            } else {
                Integer::from_str_radix(&digits.to_ascii_lowercase(), base).unwrap()
            };
            prop_assert_eq!(decoded, expected);
        }

        #[test]
        fn decode_is_deterministic((base, digits) in base_and_digits()) {
            let first = decode_strict(&digits, base).unwrap();
            let second = decode_strict(&digits, base).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(!first.is_negative());
        }

        #[test]
        fn lenient_agrees_with_strict_on_clean_input((base, digits) in base_and_digits()) {
            prop_assert_eq!(decode_lenient(&digits, base), decode_strict(&digits, base));
        }

        #[test]
        fn lenient_ignores_separators((base, digits) in base_and_digits()) {
            let separated: String = digits.chars().flat_map(|c| [c, '_']).collect();
            prop_assert_eq!(
                decode_lenient(&separated, base).unwrap(),
                decode_strict(&digits, base).unwrap()
            );
        }
    }
}
