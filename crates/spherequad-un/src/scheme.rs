//! The immutable record describing a quadrature rule.

use crate::error::SchemeError;

/// Default tolerance within which a scheme is expected to reproduce exact
/// integrals up to its declared degree.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-14;

/// A quadrature rule: points, matching weights, and the metadata describing it.
///
/// Once constructed the rule never changes; evaluators only borrow it.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadratureScheme {
    name: String,
    weights: Vec<f64>,
    points: Vec<Vec<f64>>,
    degree: u32,
    source: Option<String>,
    tolerance: f64,
}

impl QuadratureScheme {
    /// Creates a scheme with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::LengthMismatch`] unless there is exactly one
    /// weight per point.
    pub fn new(
        name: impl Into<String>,
        weights: Vec<f64>,
        points: Vec<Vec<f64>>,
        degree: u32,
        source: Option<String>,
    ) -> Result<Self, SchemeError> {
        if weights.len() != points.len() {
            return Err(SchemeError::LengthMismatch {
                weights: weights.len(),
                points: points.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            weights,
            points,
            degree,
            source,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Replaces the tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidTolerance`] unless `tolerance` is
    /// positive and finite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, SchemeError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(SchemeError::InvalidTolerance(tolerance));
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Name of the rule.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weights, one per point.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Points, each a coordinate vector.
    #[must_use]
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Highest polynomial degree the rule integrates exactly.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Citation of where the rule comes from.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Accuracy the rule is expected to reach up to its degree.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the rule has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point() -> QuadratureScheme {
        QuadratureScheme::new(
            "pair",
            vec![0.5, 0.5],
            vec![vec![-1.0], vec![1.0]],
            1,
            Some("textbook".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let scheme = two_point();
        assert_eq!(scheme.name(), "pair");
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme.degree(), 1);
        assert_eq!(scheme.source(), Some("textbook"));
        assert_eq!(scheme.tolerance(), DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_length_mismatch() {
        let err = QuadratureScheme::new("bad", vec![1.0], vec![vec![0.0], vec![1.0]], 0, None)
            .unwrap_err();
        assert_eq!(err, SchemeError::LengthMismatch { weights: 1, points: 2 });
    }

    #[test]
    fn test_tolerance() {
        let scheme = two_point().with_tolerance(1e-10).unwrap();
        assert_eq!(scheme.tolerance(), 1e-10);

        assert!(matches!(
            two_point().with_tolerance(0.0),
            Err(SchemeError::InvalidTolerance(_))
        ));
        assert!(two_point().with_tolerance(f64::NAN).is_err());
        assert!(two_point().with_tolerance(-1.0).is_err());
    }
}
