//! # spherequad
//!
//! Quadrature on n-spheres and closed-form integrals over them.
//!
//! ## Features
//!
//! - **Sphere measures**: surface measure of the n-sphere of any radius, by a
//!   two-step recurrence that stays finite for large n
//! - **Monomial integrals**: exact integrals of `x^k` over the unit n-sphere
//! - **Two arithmetics**: exact rational multiples of powers of π, or `f64`
//! - **Un schemes**: apply a unit-sphere rule to any center and radius, singly,
//!   in batches, or in parallel
//!
//! ## Quick Start
//!
//! ```
//! use spherequad::prelude::*;
//!
//! // |S²| = 4π exactly
//! assert_eq!(unit_sphere_measure(2, Mode::Exact).to_string(), "4*π");
//!
//! // ∫ x²y²z² dσ over the unit 2-sphere = 4π/105
//! let v = integrate_monomial_exact(&[2, 2, 2]).unwrap();
//! assert_eq!(v.to_string(), "4/105*π");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use spherequad_measure as measure;
pub use spherequad_numbers as numbers;
pub use spherequad_un as un;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use spherequad_measure::{
        integrate_monomial, integrate_monomial_exact, integrate_monomial_over_unit_nsphere,
        sphere_measure, sphere_measure_exact, unit_sphere_measure, Arithmetic, Exact, Float,
        MeasureError, Mode, Number,
    };
    pub use spherequad_numbers::{PiRational, Rational};
    pub use spherequad_un::{QuadratureScheme, SchemeError, Sphere, UnScheme};
}
