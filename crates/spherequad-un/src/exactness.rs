//! Checking a scheme's degree of exactness against the closed-form integrals.

use spherequad_measure::{integrate_monomial, monomial_exponents};
use tracing::warn;

use crate::un::UnScheme;

/// Values of `x^k` at each point, with points grouped by axis.
fn monomial_values(axes: &[Vec<f64>], k: &[u32]) -> Vec<f64> {
    let len = axes.first().map_or(0, Vec::len);
    (0..len)
        .map(|j| {
            axes.iter()
                .zip(k)
                .map(|(axis, &e)| power(axis[j], e))
                .product::<f64>()
        })
        .collect()
}

fn power(x: f64, e: u32) -> f64 {
    match i32::try_from(e) {
        Ok(e) => x.powi(e),
        Err(_) => x.powf(f64::from(e)),
    }
}

impl UnScheme {
    /// Absolute error of the rule on `x^k` over the unit sphere at the origin.
    ///
    /// Returns `None` if `k` does not have one exponent per axis.
    #[must_use]
    pub fn monomial_error(&self, k: &[u32]) -> Option<f64> {
        if k.len() != self.dim() as usize {
            return None;
        }
        let exact = integrate_monomial(k).ok()?;
        let origin = vec![0.0; k.len()];
        let approx = self
            .integrate(|axes| monomial_values(axes, k), &origin, 1.0)
            .ok()?;
        Some((approx - exact).abs())
    }

    /// Returns true if the rule integrates every monomial of total degree
    /// `degree` within its tolerance, measured relative to `max(1, |exact|)`.
    #[must_use]
    pub fn is_exact_for_degree(&self, degree: u32) -> bool {
        monomial_exponents(self.dim() as usize, degree)
            .iter()
            .all(|k| {
                let Ok(exact) = integrate_monomial(k) else {
                    return false;
                };
                self.monomial_error(k)
                    .is_some_and(|err| err <= self.tolerance() * exact.abs().max(1.0))
            })
    }

    /// The largest `d <= max_degree` such that every monomial of degree at
    /// most `d` is integrated within tolerance.
    ///
    /// Returns `None` if the rule fails already on constants.
    #[must_use]
    pub fn exactness_degree(&self, max_degree: u32) -> Option<u32> {
        (0..=max_degree)
            .take_while(|&d| self.is_exact_for_degree(d))
            .last()
    }

    /// Returns true if the rule reaches its declared degree.
    #[must_use]
    pub fn check_degree(&self) -> bool {
        let reached = self.exactness_degree(self.degree());
        let ok = reached == Some(self.degree());
        if !ok {
            warn!(
                scheme = self.name(),
                declared = self.degree(),
                reached = ?reached,
                "scheme does not reach its declared degree"
            );
        }
        ok
    }
}
