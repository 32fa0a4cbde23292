//! Property-based tests for threshold agreement.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shamrock_integers::{Integer, Rational};
    use shamrock_interp::{CoefficientVector, Point};
    use std::collections::BTreeSet;

    use crate::subsets::{subset_count, subsets_agree};

    // A polynomial with integer coefficients and k = degree + 1 terms
    fn integer_poly() -> impl Strategy<Value = CoefficientVector> {
        proptest::collection::vec(-500i64..500i64, 1..5)
            .prop_map(|cs| CoefficientVector::new(cs.into_iter().map(Rational::from).collect()))
    }

    fn sample(poly: &CoefficientVector, xs: BTreeSet<i64>) -> Vec<Point> {
        xs.into_iter()
            .map(|x| {
                let x = Integer::new(x);
                let y = poly.eval(&x).to_integer_if_exact().unwrap();
                Point::new(x, y)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn every_subset_recovers_the_secret(
            poly in integer_poly(),
            xs in proptest::collection::btree_set(-25i64..25i64, 5..9)
        ) {
            let k = poly.len();
            let shares = sample(&poly, xs);
            prop_assume!(shares.len() > k);

            let agreement = subsets_agree(&shares, k, &Integer::new(0), 1_000).unwrap();
            prop_assert!(agreement.agrees());
            prop_assert_eq!(agreement.majority(), Some(&poly.constant_term()));
            prop_assert_eq!(agreement.subsets as u128, subset_count(shares.len(), k));
        }

        #[test]
        fn every_subset_agrees_away_from_zero(
            poly in integer_poly(),
            xs in proptest::collection::btree_set(1i64..40i64, 5..8),
            t in -100i64..100i64
        ) {
            let k = poly.len();
            let shares = sample(&poly, xs);
            let t = Integer::new(t);

            let agreement = subsets_agree(&shares, k, &t, 1_000).unwrap();
            prop_assert!(agreement.agrees());
            prop_assert_eq!(agreement.majority(), Some(&poly.eval(&t)));
        }
    }
}
