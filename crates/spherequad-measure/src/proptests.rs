//! Property-based tests for the measure recurrences.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use spherequad_numbers::Rational;

    use crate::{
        integrate_monomial, integrate_monomial_exact, sphere_measure, sphere_measure_exact,
    };

    fn even_exponents() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::vec((0u32..6).prop_map(|e| 2 * e), 1..=5)
    }

    fn any_exponents() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::vec(0u32..10, 1..=5)
    }

    proptest! {
        #[test]
        fn sphere_measure_modes_agree(n in 0u32..60, num in 1i64..50, den in 1i64..50) {
            let exact = sphere_measure_exact(n, &Rational::new(num, den)).to_f64();
            #[allow(clippy::cast_precision_loss)]
            let float = sphere_measure(n, num as f64 / den as f64);
            prop_assert!((exact - float).abs() <= 1e-11 * float.abs());
        }

        #[test]
        fn monomial_modes_agree(k in even_exponents()) {
            let exact = integrate_monomial_exact(&k).unwrap().to_f64();
            let float = integrate_monomial(&k).unwrap();
            prop_assert!((exact - float).abs() <= 1e-12 * float.abs());
        }

        #[test]
        fn odd_exponent_integrates_to_zero(mut k in any_exponents(), idx in 0usize..5, odd in 0u32..5) {
            let idx = idx % k.len();
            k[idx] = 2 * odd + 1;
            prop_assert_eq!(integrate_monomial(&k).unwrap(), 0.0);
            prop_assert!(integrate_monomial_exact(&k).unwrap().is_zero());
        }

        #[test]
        fn even_monomials_are_positive(k in even_exponents()) {
            prop_assert!(integrate_monomial(&k).unwrap() > 0.0);
        }

        #[test]
        fn exact_value_invariant_under_axis_permutation(k in even_exponents()) {
            let mut reversed = k.clone();
            reversed.reverse();
            prop_assert_eq!(
                integrate_monomial_exact(&k).unwrap(),
                integrate_monomial_exact(&reversed).unwrap()
            );
        }

        #[test]
        fn input_is_left_untouched(k in any_exponents()) {
            let before = k.clone();
            let first = integrate_monomial(&k).unwrap();
            prop_assert_eq!(&k, &before);
            let second = integrate_monomial(&k).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn sphere_measure_modes_agree_in_high_dimensions(n in 100u32..1500, num in 1i64..=4, den in 1i64..=4) {
            let exact = sphere_measure_exact(n, &Rational::new(num, den)).to_f64();
            #[allow(clippy::cast_precision_loss)]
            let float = sphere_measure(n, num as f64 / den as f64);
            prop_assert!(!exact.is_nan());
            if float.is_normal() {
                prop_assert!((exact - float).abs() <= 1e-10 * float);
            } else {
                prop_assert!((exact - float).abs() <= f64::MIN_POSITIVE);
            }
        }
    }
}
