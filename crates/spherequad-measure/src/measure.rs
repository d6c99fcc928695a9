//! Surface measure of n-spheres.
//!
//! `S^n` here is the n-dimensional sphere (embedded in `R^(n+1)`); its measure
//! is evaluated by the two-step recurrence
//!
//! ```text
//! |S^0|(r) = 2
//! |S^1|(r) = 2πr
//! |S^n|(r) = 2π/(n-1) · r² · |S^(n-2)|(r)
//! ```
//!
//! which avoids the `π^(n/2) / Γ(n/2)` form: for large `n` both numerator and
//! denominator of that quotient overflow long before the quotient does,
//! whereas every recurrence step is a bounded multiply.

use spherequad_numbers::{PiRational, Rational};

use crate::backend::{Arithmetic, Exact, Float};

/// Measure of the n-sphere of radius `r` in the given arithmetic.
///
/// Runs the recurrence upward from `S^0` or `S^1`, so `n / 2` multiplications
/// and constant stack depth.
pub fn sphere_measure_with<A: Arithmetic>(arith: &A, n: u32, r: &A::Value) -> A::Value {
    let two_pi = arith.mul(&arith.integer(2), &arith.pi());
    let mut value = if n % 2 == 0 {
        arith.integer(2)
    } else {
        arith.mul(&two_pi, r)
    };

    let r_squared = arith.mul(r, r);
    for m in ((n % 2) + 2..=n).step_by(2) {
        let factor = arith.div_integer(&two_pi, u64::from(m - 1));
        value = arith.mul(&arith.mul(&factor, &r_squared), &value);
    }
    value
}

/// Measure of the n-sphere of radius `r`, in floating point.
#[must_use]
pub fn sphere_measure(n: u32, r: f64) -> f64 {
    sphere_measure_with(&Float, n, &r)
}

/// Exact measure of the n-sphere of rational radius `r`.
#[must_use]
pub fn sphere_measure_exact(n: u32, r: &Rational) -> PiRational {
    sphere_measure_with(&Exact, n, &PiRational::rational(r.clone()))
}

/// Measures of the n-sphere for each radius in `radii`.
///
/// Element `i` of the result is `sphere_measure(n, radii[i])`.
#[must_use]
pub fn sphere_measure_batch(n: u32, radii: &[f64]) -> Vec<f64> {
    radii.iter().map(|&r| sphere_measure(n, r)).collect()
}
