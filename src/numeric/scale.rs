// ============================================================================
// Scale Exponent
// Strongly-typed exponent applied to the radix of a fixed-point value
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponent applied to the radix of a [`FixedPoint`](super::FixedPoint).
///
/// Deliberately not convertible to or from a plain `i32` through `From`/`Into`:
/// construct with [`ScaleExponent::new`] and read with [`ScaleExponent::get`].
///
/// # Example
/// ```
/// use fixed_point::numeric::ScaleExponent;
///
/// let s = ScaleExponent::new(-2);
/// assert_eq!((-s).get(), 2);
/// assert_eq!((s + ScaleExponent::new(5)).get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ScaleExponent(i32);

impl ScaleExponent {
    /// Scale zero: unscaled value and native value coincide.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(exponent: i32) -> Self {
        Self(exponent)
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Addition that reports leaving the `i32` range instead of wrapping.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::ScaleOutOfRange)
    }

    /// Subtraction that reports leaving the `i32` range instead of wrapping.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(NumericError::ScaleOutOfRange)
    }

    /// Unchecked-mode addition: wraps at the `i32` bounds.
    #[inline]
    pub(crate) const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub(crate) const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Distance between two scales, widened so it cannot overflow.
    #[inline]
    pub(crate) const fn distance(self, other: Self) -> i64 {
        self.0 as i64 - other.0 as i64
    }
}

impl Neg for ScaleExponent {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add for ScaleExponent {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for ScaleExponent {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for ScaleExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_produces_new_values() {
        let a = ScaleExponent::new(3);
        let b = ScaleExponent::new(-5);

        assert_eq!((a + b).get(), -2);
        assert_eq!((a - b).get(), 8);
        assert_eq!((-b).get(), 5);
        // operands untouched
        assert_eq!(a.get(), 3);
        assert_eq!(b.get(), -5);
    }

    #[test]
    fn test_ordering() {
        assert!(ScaleExponent::new(-1) < ScaleExponent::ZERO);
        assert_eq!(
            ScaleExponent::new(4).max(ScaleExponent::new(2)),
            ScaleExponent::new(4)
        );
    }

    #[test]
    fn test_checked_bounds() {
        let max = ScaleExponent::new(i32::MAX);
        assert_eq!(
            max.checked_add(ScaleExponent::new(1)),
            Err(NumericError::ScaleOutOfRange)
        );
        assert_eq!(
            ScaleExponent::new(i32::MIN).checked_sub(ScaleExponent::new(1)),
            Err(NumericError::ScaleOutOfRange)
        );
        assert_eq!(
            max.checked_sub(ScaleExponent::new(1)),
            Ok(ScaleExponent::new(i32::MAX - 1))
        );
    }

    #[test]
    fn test_distance_does_not_overflow() {
        let hi = ScaleExponent::new(i32::MAX);
        let lo = ScaleExponent::new(i32::MIN);
        assert_eq!(hi.distance(lo), u32::MAX as i64);
    }
}
