//! Reductions combining integrand values with weights.
//!
//! Any `Fn(&[f64], &[f64]) -> f64` can be passed to
//! [`UnScheme::integrate_with`](crate::UnScheme::integrate_with); these are the
//! two shipped with the crate.

/// Plain dot product `Σ aᵢ bᵢ`.
///
/// Extra trailing entries of the longer slice are ignored.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Dot product with Neumaier compensated summation.
///
/// Useful for rules with many points whose weighted values cancel.
#[must_use]
pub fn compensated_dot(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;

    for (x, y) in a.iter().zip(b) {
        let term = x * y;
        let t = sum + term;
        if f64::abs(sum) >= f64::abs(term) {
            compensation += (sum - t) + term;
        } else {
            compensation += (term - t) + sum;
        }
        sum = t;
    }

    sum + compensation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn test_compensated_recovers_cancelled_terms() {
        let a = [1.0, 1e100, 1.0, -1e100];
        let b = [1.0; 4];
        assert_eq!(dot(&a, &b), 0.0);
        assert_eq!(compensated_dot(&a, &b), 2.0);
    }
}
