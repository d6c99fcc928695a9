//! Arbitrary precision rational numbers.

use dashu::base::{BitTest, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from a signed numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let value = RBig::from_parts(IBig::from(numerator), UBig::from(denominator.unsigned_abs()));
        if denominator < 0 {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates the non-negative rational `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self(RBig::from_parts(IBig::from(numerator), UBig::from(denominator)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Nearest `f64` to this rational.
    ///
    /// Values outside the `f64` range saturate to ±∞ or 0.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let (mantissa, exponent) = self.to_scaled_f64();
        scale_by_pow2(mantissa, exponent)
    }

    /// Splits into `(m, e)` with `self ≈ m · 2^e` and `1/2 < |m| < 2`.
    ///
    /// Only `m` is rounded, so this never overflows or underflows. Zero
    /// gives `(0.0, 0)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_scaled_f64(&self) -> (f64, i64) {
        if self.0.is_zero() {
            return (0.0, 0);
        }

        let num_bits = self.0.numerator().clone().unsigned_abs().bit_len() as i64;
        let den_bits = self.0.denominator().bit_len() as i64;
        let shift = den_bits - num_bits;

        let scaled = if shift >= 0 {
            let factor = RBig::from(IBig::ONE << shift.unsigned_abs() as usize);
            &self.0 * &factor
        } else {
            let factor = RBig::from(IBig::ONE << shift.unsigned_abs() as usize);
            self.0.clone() / &factor
        };

        (scaled.to_f64().value(), -shift)
    }
}

/// Computes `x · 2^e`, saturating to ±∞ or 0.
pub(crate) fn scale_by_pow2(mut x: f64, mut e: i64) -> f64 {
    const STEP: i32 = 1000;

    while e > i64::from(STEP) && x.is_finite() && x != 0.0 {
        x *= 2f64.powi(STEP);
        e -= i64::from(STEP);
    }
    while e < -i64::from(STEP) && x != 0.0 {
        x *= 2f64.powi(-STEP);
        e += i64::from(STEP);
    }

    match i32::try_from(e) {
        Ok(e) => x * 2f64.powi(e),
        Err(_) => x,
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }
}

impl From<u64> for Rational {
    fn from(n: u64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }
}
