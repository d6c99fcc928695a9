//! Numeric backends for the measure recurrences.
//!
//! A backend is chosen once at the top of a call and the same object is
//! handed to every recursive step, so one evaluation can never mix exact and
//! floating-point arithmetic.

use std::f64::consts::PI;
use std::fmt::Debug;

use spherequad_numbers::{PiRational, Rational};

/// The operations the recurrences need from a number system.
///
/// # Laws
///
/// - `mul` is associative and commutative with identity `one()`
/// - `ratio(a, b)` is `a / b` and `div_integer(x, d)` is `x / d`
/// - `pi()` is π (exactly, or to the precision of the backend)
pub trait Arithmetic {
    /// The values this backend computes with.
    type Value: Clone + Debug + PartialEq;

    /// The constant π.
    fn pi(&self) -> Self::Value;

    /// Embeds a non-negative integer.
    fn integer(&self, n: u64) -> Self::Value;

    /// The quotient `numerator / denominator`.
    ///
    /// Callers guarantee `denominator != 0`.
    fn ratio(&self, numerator: u64, denominator: u64) -> Self::Value;

    /// Multiplies two values.
    fn mul(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// Divides a value by a non-zero integer.
    fn div_integer(&self, a: &Self::Value, divisor: u64) -> Self::Value;

    /// The additive identity.
    fn zero(&self) -> Self::Value {
        self.integer(0)
    }

    /// The multiplicative identity.
    fn one(&self) -> Self::Value {
        self.integer(1)
    }
}

/// Exact arithmetic over `Q[π]` monomials.
///
/// Values are [`PiRational`]s; no rounding ever takes place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl Arithmetic for Exact {
    type Value = PiRational;

    fn pi(&self) -> PiRational {
        PiRational::pi()
    }

    fn integer(&self, n: u64) -> PiRational {
        PiRational::rational(Rational::from(n))
    }

    fn ratio(&self, numerator: u64, denominator: u64) -> PiRational {
        PiRational::rational(Rational::from_ratio(numerator, denominator))
    }

    fn mul(&self, a: &PiRational, b: &PiRational) -> PiRational {
        a * b
    }

    fn div_integer(&self, a: &PiRational, divisor: u64) -> PiRational {
        a.clone() * &Rational::from_ratio(1, divisor)
    }
}

/// IEEE-754 double precision arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Float;

#[allow(clippy::cast_precision_loss)]
impl Arithmetic for Float {
    type Value = f64;

    fn pi(&self) -> f64 {
        PI
    }

    fn integer(&self, n: u64) -> f64 {
        n as f64
    }

    fn ratio(&self, numerator: u64, denominator: u64) -> f64 {
        numerator as f64 / denominator as f64
    }

    fn mul(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn div_integer(&self, a: &f64, divisor: u64) -> f64 {
        a / divisor as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ratio_is_reduced() {
        assert_eq!(Exact.ratio(2, 4), PiRational::rational(Rational::new(1, 2)));
        assert_eq!(Exact.ratio(0, 7), Exact.zero());
    }

    #[test]
    fn test_exact_div_integer_keeps_pi() {
        let two_pi = Exact.mul(&Exact.integer(2), &Exact.pi());
        let v = Exact.div_integer(&two_pi, 3);
        assert_eq!(v, PiRational::new(Rational::new(2, 3), 1));
    }

    #[test]
    fn test_float_backend() {
        assert_eq!(Float.ratio(1, 4), 0.25);
        assert_eq!(Float.div_integer(&3.0, 2), 1.5);
        assert_eq!(Float.one(), 1.0);
        assert_eq!(Float.pi(), PI);
    }
}
