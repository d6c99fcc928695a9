//! Errors raised when building or applying a quadrature scheme.

use thiserror::Error;

/// Errors that can occur when constructing or evaluating a scheme.
///
/// Failures of the user integrand are never converted into this type; see
/// [`UnScheme::try_integrate`](crate::UnScheme::try_integrate).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SchemeError {
    /// Weights and points differ in number.
    #[error("scheme has {weights} weights but {points} points")]
    LengthMismatch {
        /// Number of weights.
        weights: usize,
        /// Number of points.
        points: usize,
    },

    /// A point has the wrong number of coordinates.
    #[error("point {index} has {found} coordinates, expected {expected}")]
    PointDimension {
        /// Index of the offending point.
        index: usize,
        /// Dimension of the scheme.
        expected: usize,
        /// Coordinates found.
        found: usize,
    },

    /// The ambient dimension is zero.
    #[error("a Un scheme needs an ambient dimension of at least 1")]
    ZeroDimension,

    /// The center has the wrong number of coordinates.
    #[error("center has {found} coordinates, expected {expected}")]
    CenterDimension {
        /// Dimension of the scheme.
        expected: usize,
        /// Coordinates found.
        found: usize,
    },

    /// The integrand returned the wrong number of values.
    #[error("integrand returned {found} values for {expected} points")]
    IntegrandLength {
        /// Number of quadrature points.
        expected: usize,
        /// Number of values returned.
        found: usize,
    },

    /// The tolerance is not a positive finite number.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}
