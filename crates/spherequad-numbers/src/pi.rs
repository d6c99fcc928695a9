//! Exact rational multiples of powers of π.
//!
//! Surface measures of unit spheres are `2·π^(n/2) / Γ(n/2)`, which for
//! integer `n` is always a rational times an integral power of π. Monomial
//! integrals over the unit sphere only rescale those measures by rationals,
//! so the set `{ c·π^k : c ∈ Q, k ∈ N }` is closed under every operation the
//! recurrences perform.

use num_traits::{One, Zero};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Mul, Neg};

use crate::rational::scale_by_pow2;
use crate::Rational;

/// The exact value `coefficient · π^pi_power`.
///
/// Zero is canonical: a zero coefficient always carries `pi_power == 0`, so
/// structural equality coincides with numerical equality.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PiRational {
    coefficient: Rational,
    pi_power: u32,
}

impl PiRational {
    /// Creates `coefficient · π^pi_power`.
    #[must_use]
    pub fn new(coefficient: Rational, pi_power: u32) -> Self {
        if coefficient.is_zero() {
            Self::zero()
        } else {
            Self {
                coefficient,
                pi_power,
            }
        }
    }

    /// The exact constant π.
    #[must_use]
    pub fn pi() -> Self {
        Self {
            coefficient: Rational::one(),
            pi_power: 1,
        }
    }

    /// Lifts a rational (π-power zero).
    #[must_use]
    pub fn rational(coefficient: Rational) -> Self {
        Self::new(coefficient, 0)
    }

    /// The exact value 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coefficient: Rational::zero(),
            pi_power: 0,
        }
    }

    /// The exact value 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coefficient: Rational::one(),
            pi_power: 0,
        }
    }

    /// Returns the rational coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &Rational {
        &self.coefficient
    }

    /// Returns the power of π.
    #[must_use]
    pub fn pi_power(&self) -> u32 {
        self.pi_power
    }

    /// Returns true if this is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Evaluates `coefficient · π^pi_power` in floating point.
    ///
    /// Coefficient and π-power are each carried as a mantissa with a separate
    /// binary exponent, so the result only saturates or underflows when the
    /// value itself lies outside the `f64` range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.pi_power == 0 {
            return self.coefficient.to_f64();
        }
        let (mantissa, exponent) = self.coefficient.to_scaled_f64();
        let (pi_mantissa, pi_exponent) = pi_power_scaled(self.pi_power);
        scale_by_pow2(mantissa * pi_mantissa, exponent + pi_exponent)
    }
}

/// `π^k` as `(m, e)` with `π^k = m · 2^e` and `1 <= m < 2`.
fn pi_power_scaled(k: u32) -> (f64, i64) {
    let mut result = (1.0, 0);
    let mut base = normalize(PI, 0);
    let mut remaining = k;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = normalize(result.0 * base.0, result.1 + base.1);
        }
        base = normalize(base.0 * base.0, 2 * base.1);
        remaining >>= 1;
    }

    result
}

/// Rewrites `m · 2^e` with the mantissa in `[1, 2)`. `m` must be positive and normal.
#[allow(clippy::cast_possible_wrap)]
fn normalize(m: f64, e: i64) -> (f64, i64) {
    const EXPONENT_MASK: u64 = 0x7ff << 52;
    let bits = m.to_bits();
    let biased = ((bits & EXPONENT_MASK) >> 52) as i64;
    let mantissa = f64::from_bits((bits & !EXPONENT_MASK) | (1023 << 52));
    (mantissa, e + biased - 1023)
}

impl Mul for PiRational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.coefficient * rhs.coefficient,
            self.pi_power + rhs.pi_power,
        )
    }
}

impl Mul for &PiRational {
    type Output = PiRational;

    fn mul(self, rhs: Self) -> Self::Output {
        PiRational::new(
            &self.coefficient * &rhs.coefficient,
            self.pi_power + rhs.pi_power,
        )
    }
}

impl Mul<&Rational> for PiRational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self::new(self.coefficient * rhs, self.pi_power)
    }
}

impl Neg for PiRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coefficient: -self.coefficient,
            pi_power: self.pi_power,
        }
    }
}

impl From<Rational> for PiRational {
    fn from(value: Rational) -> Self {
        Self::rational(value)
    }
}

impl From<i64> for PiRational {
    fn from(value: i64) -> Self {
        Self::rational(Rational::from(value))
    }
}

impl fmt::Debug for PiRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PiRational({self})")
    }
}

impl fmt::Display for PiRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pi_power == 0 {
            return write!(f, "{}", self.coefficient);
        }

        if self.coefficient.is_one() {
            // bare π
        } else if self.coefficient == -Rational::one() {
            write!(f, "-")?;
        } else {
            write!(f, "{}*", self.coefficient)?;
        }

        if self.pi_power == 1 {
            write!(f, "π")
        } else {
            write!(f, "π^{}", self.pi_power)
        }
    }
}
