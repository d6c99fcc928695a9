//! Errors raised by the measure recurrences.

use thiserror::Error;

/// Errors that can occur when evaluating a monomial integral.
///
/// Negative or fractional exponents cannot be expressed (exponents are `u32`),
/// so the only failures are shape problems of the exponent vector itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// An empty exponent vector describes a sphere in 0-dimensional space,
    /// whose measure is undefined.
    #[error("exponent vector is empty: a monomial needs at least one axis")]
    EmptyExponents,

    /// The exponent vector has more axes than a dimension can represent.
    #[error("exponent vector has {0} axes, which exceeds the supported dimension")]
    DimensionTooLarge(usize),
}
