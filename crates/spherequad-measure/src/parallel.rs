//! Parallel evaluation of independent monomial integrals.
//!
//! Every integral is a pure function of its exponent vector, so a batch can be
//! spread across rayon's work-stealing pool without any coordination.

use rayon::prelude::*;

use crate::error::MeasureError;
use crate::mode::{integrate_monomial_over_unit_nsphere, Mode, Number};

/// Integrates each monomial in `exponents` over its unit sphere in parallel.
///
/// Element `i` of the result corresponds to `exponents[i]`.
#[must_use]
pub fn integrate_monomials_par(exponents: &[Vec<u32>], mode: Mode) -> Vec<Result<Number, MeasureError>> {
    exponents
        .par_iter()
        .map(|k| integrate_monomial_over_unit_nsphere(k, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponents::monomial_exponents_up_to;

    #[test]
    fn test_parallel_matches_sequential() {
        let exponents = monomial_exponents_up_to(3, 6);
        for mode in [Mode::Exact, Mode::Float] {
            let parallel = integrate_monomials_par(&exponents, mode);
            assert_eq!(parallel.len(), exponents.len());
            for (k, result) in exponents.iter().zip(parallel) {
                assert_eq!(result, integrate_monomial_over_unit_nsphere(k, mode));
            }
        }
    }

    #[test]
    fn test_errors_are_per_item() {
        let exponents = vec![vec![2, 0], Vec::new(), vec![0, 2]];
        let results = integrate_monomials_par(&exponents, Mode::Float);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(MeasureError::EmptyExponents));
        assert!(results[2].is_ok());
    }
}
