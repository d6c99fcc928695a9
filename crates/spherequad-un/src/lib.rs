//! # spherequad-un
//!
//! Quadrature on n-spheres ("Un" domains).
//!
//! A [`UnScheme`] binds a fixed rule for the unit sphere in n-dimensional
//! space (points on the sphere plus weights normalised so they sum to one over
//! the unit sphere) and evaluates `∫ f dσ` over any sphere by moving the points
//! onto it and rescaling by the exact surface measure.
//!
//! Point and weight tables are supplied by the caller; this crate never
//! generates them.
//!
//! # Example
//!
//! ```
//! use spherequad_un::UnScheme;
//!
//! // Four points on the unit circle, exact up to degree 3.
//! let scheme = UnScheme::new(
//!     "square",
//!     2,
//!     vec![0.25; 4],
//!     vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, 0.0], vec![0.0, -1.0]],
//!     3,
//!     None,
//! )
//! .unwrap();
//!
//! // ∫ x² over the circle of radius 2 centred at the origin = 8π
//! let value = scheme
//!     .integrate(|axes| axes[0].iter().map(|x| x * x).collect(), &[0.0, 0.0], 2.0)
//!     .unwrap();
//! assert!((value - 8.0 * std::f64::consts::PI).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod exactness;
pub mod reduce;
pub mod scheme;
pub mod sphere;
pub mod un;

#[cfg(test)]
mod proptests;

pub use error::SchemeError;
pub use reduce::{compensated_dot, dot};
pub use scheme::{QuadratureScheme, DEFAULT_TOLERANCE};
pub use sphere::Sphere;
pub use un::UnScheme;
