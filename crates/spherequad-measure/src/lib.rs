//! # spherequad-measure
//!
//! The closed-form engine behind quadrature on n-spheres:
//!
//! - [`sphere_measure_with`]: the surface measure of the n-sphere of radius `r`
//!   (`S^0` is two points, `S^1` a circle, `S^2` the ordinary sphere, ...)
//! - [`integrate_monomial_with`]: the exact integral of `x₁^k₁ ⋯ xₙ^kₙ` over the
//!   unit sphere in n-dimensional space
//!
//! Both are written once against the [`Arithmetic`] backend trait and run
//! either exactly ([`Exact`], values are rational multiples of powers of π) or
//! in floating point ([`Float`]).
//!
//! # Example
//!
//! ```
//! use spherequad_measure::{integrate_monomial_over_unit_nsphere, sphere_measure, Mode};
//!
//! // Surface area of the unit 2-sphere
//! assert!((sphere_measure(2, 1.0) - 4.0 * std::f64::consts::PI).abs() < 1e-14);
//!
//! // ∫ x² over the unit circle = π
//! let value = integrate_monomial_over_unit_nsphere(&[2, 0], Mode::Exact).unwrap();
//! assert_eq!(value.to_string(), "π");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod backend;
pub mod error;
pub mod exponents;
pub mod measure;
pub mod mode;
pub mod monomial;
pub mod parallel;

#[cfg(test)]
mod proptests;

pub use backend::{Arithmetic, Exact, Float};
pub use error::MeasureError;
pub use exponents::{monomial_exponents, monomial_exponents_up_to};
pub use measure::{sphere_measure, sphere_measure_batch, sphere_measure_exact, sphere_measure_with};
pub use mode::{integrate_monomial_over_unit_nsphere, unit_sphere_measure, Mode, Number};
pub use monomial::{integrate_monomial, integrate_monomial_exact, integrate_monomial_with};
pub use parallel::integrate_monomials_par;
