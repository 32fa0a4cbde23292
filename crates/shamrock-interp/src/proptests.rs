//! Property-based tests for polynomial reconstruction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shamrock_integers::{Integer, Rational};
    use std::collections::BTreeSet;

    use crate::coefficients::CoefficientVector;
    use crate::lagrange::lagrange_eval;
    use crate::point::{Point, PointSet};
    use crate::vandermonde::solve_coefficients;
    use crate::verify::verify;

    // Distinct abscissae with arbitrary ordinates, in shuffled order
    fn point_set() -> impl Strategy<Value = PointSet> {
        proptest::collection::btree_set(-40i64..40i64, 1..7)
            .prop_flat_map(|xs: BTreeSet<i64>| {
                let n = xs.len();
                (
                    Just(xs.into_iter().collect::<Vec<_>>()),
                    proptest::collection::vec(-10_000i64..10_000i64, n),
                )
            })
            .prop_map(|(xs, ys)| {
                xs.into_iter()
                    .rev()
                    .zip(ys)
                    .map(Point::from)
                    .collect::<PointSet>()
            })
    }

    // A polynomial with integer coefficients of degree below 6
    fn integer_poly() -> impl Strategy<Value = CoefficientVector> {
        proptest::collection::vec(-500i64..500i64, 1..6)
            .prop_map(|cs| CoefficientVector::new(cs.into_iter().map(Rational::from).collect()))
    }

    proptest! {
        #[test]
        fn lagrange_reproduces_points(points in point_set()) {
            for p in &points {
                prop_assert_eq!(
                    lagrange_eval(&points, &p.x).unwrap(),
                    Rational::from_integer(p.y.clone())
                );
            }
        }

        #[test]
        fn coefficients_reproduce_points(points in point_set()) {
            let coeffs = solve_coefficients(&points).unwrap();
            prop_assert_eq!(coeffs.len(), points.len());
            for p in &points {
                prop_assert_eq!(coeffs.eval(&p.x), Rational::from_integer(p.y.clone()));
            }
        }

        #[test]
        fn paths_agree_everywhere(points in point_set(), t in -1000i64..1000i64) {
            let t = Integer::new(t);
            let coeffs = solve_coefficients(&points).unwrap();
            prop_assert_eq!(lagrange_eval(&points, &t).unwrap(), coeffs.eval(&t));
        }

        #[test]
        fn verification_is_consistent(points in point_set(), t in -1000i64..1000i64) {
            let coeffs = solve_coefficients(&points).unwrap();
            let report = verify(&points, &coeffs, &[Integer::new(0), Integer::new(t)]).unwrap();
            prop_assert!(report.is_consistent());
        }

        #[test]
        fn recovers_sampled_polynomial(
            poly in integer_poly(),
            xs in proptest::collection::btree_set(-30i64..30i64, 6..10)
        ) {
            // Any k >= degree + 1 samples recover the same polynomial.
            let points: PointSet = xs
                .into_iter()
                .map(|x| {
                    let x = Integer::new(x);
                    let y = poly.eval(&x).to_integer_if_exact().unwrap();
                    Point::new(x, y)
                })
                .collect();
            prop_assert_eq!(
                lagrange_eval(&points, &Integer::new(0)).unwrap(),
                poly.constant_term()
            );
            let recovered = solve_coefficients(&points).unwrap();
            for j in 0..recovered.len() {
                prop_assert_eq!(recovered.coeff(j), poly.coeff(j));
            }
        }

        #[test]
        fn duplicate_abscissa_is_singular_on_both_paths(
            points in point_set(),
            y in -100i64..100i64
        ) {
            let mut with_dup = points.points().to_vec();
            let x = with_dup[0].x.clone();
            with_dup.push(Point::new(x, Integer::new(y)));
            let with_dup = PointSet::new(with_dup);

            prop_assert!(lagrange_eval(&with_dup, &Integer::new(0)).unwrap_err().is_singular());
            prop_assert!(solve_coefficients(&with_dup).unwrap_err().is_singular());
        }
    }
}
