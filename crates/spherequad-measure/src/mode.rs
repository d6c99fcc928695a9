//! Runtime selection between exact and floating-point evaluation.

use std::fmt;

use spherequad_numbers::PiRational;

use crate::backend::{Exact, Float};
use crate::error::MeasureError;
use crate::measure::sphere_measure_with;
use crate::monomial::integrate_monomial_with;

/// Which arithmetic a call should run in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Exact rational multiples of powers of π.
    Exact,
    /// Double precision floating point.
    #[default]
    Float,
}

/// A value produced in one of the two modes.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// Exact value `c·π^k`.
    Exact(PiRational),
    /// Floating-point value.
    Float(f64),
}

impl Number {
    /// Returns the value as a float, evaluating exact values.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Exact(v) => v.to_f64(),
            Number::Float(v) => *v,
        }
    }

    /// Returns the exact value if this was computed exactly.
    #[must_use]
    pub fn as_exact(&self) -> Option<&PiRational> {
        match self {
            Number::Exact(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// Returns the mode this value was computed in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Number::Exact(_) => Mode::Exact,
            Number::Float(_) => Mode::Float,
        }
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Exact(v) => v.is_zero(),
            Number::Float(v) => *v == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Exact(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Measure of the unit n-sphere in the requested mode.
#[must_use]
pub fn unit_sphere_measure(n: u32, mode: Mode) -> Number {
    match mode {
        Mode::Exact => Number::Exact(sphere_measure_with(&Exact, n, &PiRational::one())),
        Mode::Float => Number::Float(sphere_measure_with(&Float, n, &1.0)),
    }
}

/// Integral of the monomial with exponents `k` over the unit sphere in
/// `k.len()`-dimensional space, in the requested mode.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyExponents`] if `k` is empty.
pub fn integrate_monomial_over_unit_nsphere(k: &[u32], mode: Mode) -> Result<Number, MeasureError> {
    match mode {
        Mode::Exact => integrate_monomial_with(&Exact, k).map(Number::Exact),
        Mode::Float => integrate_monomial_with(&Float, k).map(Number::Float),
    }
}
