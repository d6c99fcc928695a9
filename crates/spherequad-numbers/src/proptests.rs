//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{PiRational, Rational};

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000i64, 1i64..1000i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn pi_rational() -> impl Strategy<Value = PiRational> {
        (small_rational(), 0u32..6).prop_map(|(c, k)| PiRational::new(c, k))
    }

    proptest! {
        #[test]
        fn rational_to_f64_matches_division(n in -1000i64..1000i64, d in 1i64..1000i64) {
            let exact = Rational::new(n, d).to_f64();
            #[allow(clippy::cast_precision_loss)]
            let float = n as f64 / d as f64;
            prop_assert!((exact - float).abs() <= 1e-15 * float.abs().max(1.0));
        }

        #[test]
        fn pi_mul_commutative(a in pi_rational(), b in pi_rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn pi_mul_associative(a in pi_rational(), b in pi_rational(), c in pi_rational()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn pi_one_identity(a in pi_rational()) {
            prop_assert_eq!(&a * &PiRational::one(), a);
        }

        #[test]
        fn pi_mul_consistent_with_f64(a in pi_rational(), b in pi_rational()) {
            let exact = (&a * &b).to_f64();
            let float = a.to_f64() * b.to_f64();
            prop_assert!((exact - float).abs() <= 1e-12 * float.abs().max(1.0));
        }
    }
}
