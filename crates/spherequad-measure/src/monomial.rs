//! Integrals of monomials over the unit n-sphere.
//!
//! Folland's closed form
//!
//! ```text
//! ∫ x^k dσ = 2 ∏ Γ((kᵢ+1)/2) / Γ(Σ (kᵢ+1)/2)
//! ```
//!
//! overflows quickly in both numerator and denominator. Integrating by parts
//! along one axis instead gives
//!
//! ```text
//! ∫ x^k dσ = (kᵢ - 1) / (|k| + n - 2) · ∫ x^(k - 2eᵢ) dσ
//! ```
//!
//! which lowers the total degree by two per step and ends at the plain sphere
//! measure once every exponent is zero.
//!
//! Reference: G. B. Folland, *How to Integrate a Polynomial over a Sphere*,
//! The American Mathematical Monthly 108 (5), 2001, pp. 446-448.

use spherequad_numbers::PiRational;

use crate::backend::{Arithmetic, Exact, Float};
use crate::error::MeasureError;
use crate::measure::sphere_measure_with;

/// Integral of `x₁^k₁ ⋯ xₙ^kₙ` over the unit sphere in `n = k.len()` dimensions.
///
/// `k` is only read; the lowering works on a single copy.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyExponents`] if `k` is empty and
/// [`MeasureError::DimensionTooLarge`] if `k.len()` does not fit a `u32`.
pub fn integrate_monomial_with<A: Arithmetic>(arith: &A, k: &[u32]) -> Result<A::Value, MeasureError> {
    if k.is_empty() {
        return Err(MeasureError::EmptyExponents);
    }
    let n = u32::try_from(k.len()).map_err(|_| MeasureError::DimensionTooLarge(k.len()))?;
    Ok(integrate_lowering(arith, k, n))
}

fn integrate_lowering<A: Arithmetic>(arith: &A, k: &[u32], n: u32) -> A::Value {
    // odd powers cancel over the symmetric sphere
    if k.iter().any(|&a| a % 2 == 1) {
        return arith.zero();
    }

    let mut lowered = k.to_vec();
    let mut degree: u64 = k.iter().map(|&a| u64::from(a)).sum();
    let mut alphas = Vec::new();

    while let Some(idx) = lowered.iter().position(|&a| a > 0) {
        // lowered[idx] >= 2 and the total degree is >= 2, so both terms are >= 1
        alphas.push(arith.ratio(u64::from(lowered[idx]) - 1, degree + u64::from(n) - 2));
        lowered[idx] -= 2;
        degree -= 2;
    }

    // innermost factor first, matching the order of the integration by parts
    let base = sphere_measure_with(arith, n - 1, &arith.one());
    alphas.iter().rev().fold(base, |acc, alpha| arith.mul(&acc, alpha))
}

/// Floating-point integral of a monomial over the unit sphere.
///
/// # Errors
///
/// See [`integrate_monomial_with`].
pub fn integrate_monomial(k: &[u32]) -> Result<f64, MeasureError> {
    integrate_monomial_with(&Float, k)
}

/// Exact integral of a monomial over the unit sphere.
///
/// # Errors
///
/// See [`integrate_monomial_with`].
pub fn integrate_monomial_exact(k: &[u32]) -> Result<PiRational, MeasureError> {
    integrate_monomial_with(&Exact, k)
}
