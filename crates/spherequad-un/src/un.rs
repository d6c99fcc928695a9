//! Quadrature over n-spheres of arbitrary center and radius.
//!
//! A rule for the unit sphere in `R^n` carries weights normalised so that
//! `Σ wᵢ f(xᵢ)` approximates the *mean* of `f` over the sphere. To integrate
//! over the sphere with center `c` and radius `r` the points are mapped to
//! `c + r·xᵢ` and the weighted mean is multiplied by the exact measure
//! `|S^(n-1)|(r)`.

use std::fmt;

use rayon::prelude::*;
use spherequad_measure::sphere_measure;
use tracing::{debug, trace};

use crate::error::SchemeError;
use crate::reduce::dot;
use crate::scheme::QuadratureScheme;
use crate::sphere::Sphere;

/// A quadrature rule for the unit sphere in `dim`-dimensional space.
#[derive(Clone, Debug, PartialEq)]
pub struct UnScheme {
    scheme: QuadratureScheme,
    dim: u32,
    domain: String,
}

impl UnScheme {
    /// Creates a scheme from unit-sphere points and their weights.
    ///
    /// # Errors
    ///
    /// Returns an error if `dim` is zero, if weights and points differ in
    /// number, or if some point does not have `dim` coordinates.
    pub fn new(
        name: impl Into<String>,
        dim: u32,
        weights: Vec<f64>,
        points: Vec<Vec<f64>>,
        degree: u32,
        source: Option<String>,
    ) -> Result<Self, SchemeError> {
        let scheme = QuadratureScheme::new(name, weights, points, degree, source)?;
        Self::from_scheme(scheme, dim)
    }

    /// Binds an existing rule to the unit sphere in `dim`-dimensional space.
    ///
    /// # Errors
    ///
    /// See [`UnScheme::new`].
    pub fn from_scheme(scheme: QuadratureScheme, dim: u32) -> Result<Self, SchemeError> {
        if dim == 0 {
            return Err(SchemeError::ZeroDimension);
        }

        let expected = dim as usize;
        if let Some((index, point)) = scheme
            .points()
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != expected)
        {
            return Err(SchemeError::PointDimension {
                index,
                expected,
                found: point.len(),
            });
        }

        debug!(
            name = scheme.name(),
            dim,
            points = scheme.len(),
            degree = scheme.degree(),
            "built Un scheme"
        );

        Ok(Self {
            scheme,
            dim,
            domain: format!("Un (n={dim})"),
        })
    }

    /// Replaces the tolerance of the underlying rule.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidTolerance`] unless `tolerance` is
    /// positive and finite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, SchemeError> {
        self.scheme = self.scheme.with_tolerance(tolerance)?;
        Ok(self)
    }

    /// The domain label, `"Un (n=<dim>)"`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Ambient dimension.
    #[must_use]
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// The underlying rule.
    #[must_use]
    pub fn scheme(&self) -> &QuadratureScheme {
        &self.scheme
    }

    /// Name of the rule.
    #[must_use]
    pub fn name(&self) -> &str {
        self.scheme.name()
    }

    /// Declared degree of exactness.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.scheme.degree()
    }

    /// Tolerance of the rule.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.scheme.tolerance()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scheme.len()
    }

    /// Returns true if the rule has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
    }

    /// The rule's points moved onto the sphere `(center, radius)`, grouped by
    /// axis: entry `[i][j]` is coordinate `i` of point `j`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::CenterDimension`] if `center` does not have
    /// `dim` coordinates.
    pub fn evaluation_points(&self, center: &[f64], radius: f64) -> Result<Vec<Vec<f64>>, SchemeError> {
        if center.len() != self.dim as usize {
            return Err(SchemeError::CenterDimension {
                expected: self.dim as usize,
                found: center.len(),
            });
        }

        let points = self.scheme.points();
        Ok(center
            .iter()
            .enumerate()
            .map(|(axis, &c)| points.iter().map(|p| c + radius * p[axis]).collect())
            .collect())
    }

    /// Integrates `f` over the sphere `(center, radius)`.
    ///
    /// `f` receives the evaluation points grouped by axis (see
    /// [`UnScheme::evaluation_points`]) and must return one value per point.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::CenterDimension`] for a center of the wrong
    /// dimension and [`SchemeError::IntegrandLength`] if `f` returns the wrong
    /// number of values.
    pub fn integrate<F>(&self, f: F, center: &[f64], radius: f64) -> Result<f64, SchemeError>
    where
        F: FnMut(&[Vec<f64>]) -> Vec<f64>,
    {
        self.integrate_with(f, center, radius, dot)
    }

    /// Like [`UnScheme::integrate`], with a custom reduction of values
    /// against weights in place of [`dot`].
    ///
    /// # Errors
    ///
    /// See [`UnScheme::integrate`].
    pub fn integrate_with<F, D>(&self, mut f: F, center: &[f64], radius: f64, reduce: D) -> Result<f64, SchemeError>
    where
        F: FnMut(&[Vec<f64>]) -> Vec<f64>,
        D: Fn(&[f64], &[f64]) -> f64,
    {
        self.try_integrate_with(|axes| Ok::<_, SchemeError>(f(axes)), center, radius, reduce)
    }

    /// Integrates a fallible `f` over the sphere `(center, radius)`.
    ///
    /// An `Err` returned by `f` is passed back to the caller exactly as
    /// produced. Shape errors detected by the scheme are converted with
    /// `E::from`.
    ///
    /// # Errors
    ///
    /// Returns the integrand's own error, or a converted [`SchemeError`].
    pub fn try_integrate<F, E>(&self, f: F, center: &[f64], radius: f64) -> Result<f64, E>
    where
        F: FnMut(&[Vec<f64>]) -> Result<Vec<f64>, E>,
        E: From<SchemeError>,
    {
        self.try_integrate_with(f, center, radius, dot)
    }

    /// Like [`UnScheme::try_integrate`], with a custom reduction.
    ///
    /// # Errors
    ///
    /// See [`UnScheme::try_integrate`].
    pub fn try_integrate_with<F, E, D>(&self, mut f: F, center: &[f64], radius: f64, reduce: D) -> Result<f64, E>
    where
        F: FnMut(&[Vec<f64>]) -> Result<Vec<f64>, E>,
        E: From<SchemeError>,
        D: Fn(&[f64], &[f64]) -> f64,
    {
        trace!(scheme = self.name(), dim = self.dim, radius, "integrating over sphere");
        let axes = self.evaluation_points(center, radius)?;
        let values = f(&axes)?;

        if values.len() != self.len() {
            return Err(SchemeError::IntegrandLength {
                expected: self.len(),
                found: values.len(),
            }
            .into());
        }

        let reference = sphere_measure(self.dim - 1, radius);
        Ok(reference * reduce(&values, self.scheme.weights()))
    }

    /// Integrates `f` over concentric spheres, one per radius.
    ///
    /// # Errors
    ///
    /// Stops at the first failing sphere; see [`UnScheme::integrate`].
    pub fn integrate_radii<F>(&self, mut f: F, center: &[f64], radii: &[f64]) -> Result<Vec<f64>, SchemeError>
    where
        F: FnMut(&[Vec<f64>]) -> Vec<f64>,
    {
        trace!(scheme = self.name(), spheres = radii.len(), "integrating over radii");
        radii
            .iter()
            .map(|&r| self.integrate(&mut f, center, r))
            .collect()
    }

    /// Integrates `f` over each sphere in `spheres`.
    ///
    /// Element `i` of the result belongs to `spheres[i]`.
    ///
    /// # Errors
    ///
    /// Stops at the first failing sphere; see [`UnScheme::integrate`].
    pub fn integrate_spheres<F>(&self, mut f: F, spheres: &[Sphere]) -> Result<Vec<f64>, SchemeError>
    where
        F: FnMut(&[Vec<f64>]) -> Vec<f64>,
    {
        trace!(scheme = self.name(), spheres = spheres.len(), "integrating over spheres");
        spheres
            .iter()
            .map(|s| self.integrate(&mut f, &s.center, s.radius))
            .collect()
    }

    /// Parallel version of [`UnScheme::integrate_spheres`].
    ///
    /// # Errors
    ///
    /// Returns an error if any sphere fails; see [`UnScheme::integrate`].
    pub fn par_integrate_spheres<F>(&self, f: F, spheres: &[Sphere]) -> Result<Vec<f64>, SchemeError>
    where
        F: Fn(&[Vec<f64>]) -> Vec<f64> + Sync,
    {
        trace!(scheme = self.name(), spheres = spheres.len(), "integrating over spheres in parallel");
        spheres
            .par_iter()
            .map(|s| self.integrate(&f, &s.center, s.radius))
            .collect()
    }
}

impl fmt::Display for UnScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}], degree {}, {} points",
            self.name(),
            self.domain,
            self.degree(),
            self.len()
        )
    }
}
