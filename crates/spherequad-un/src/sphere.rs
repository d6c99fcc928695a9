//! Target spheres for batched integration.

/// A sphere given by its center and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Center coordinates, one per axis.
    pub center: Vec<f64>,
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere.
    #[must_use]
    pub fn new(center: Vec<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The unit sphere centred at the origin of `dim`-dimensional space.
    #[must_use]
    pub fn unit(dim: usize) -> Self {
        Self {
            center: vec![0.0; dim],
            radius: 1.0,
        }
    }

    /// Spheres sharing one center, one per radius.
    #[must_use]
    pub fn concentric(center: &[f64], radii: &[f64]) -> Vec<Self> {
        radii
            .iter()
            .map(|&radius| Self::new(center.to_vec(), radius))
            .collect()
    }

    /// Number of coordinates of the center.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.center.len()
    }
}
