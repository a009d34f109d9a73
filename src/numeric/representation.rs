// ============================================================================
// Representation
// Signed integer types that can hold the unscaled value of a fixed-point number
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

mod sealed {
    pub trait Sealed {}
}

/// Signed integer storage for the unscaled value.
///
/// Implemented for `i8`, `i16`, `i32` and `i64` only; unsigned storage is not
/// supported. All widening goes through `i128`, which holds every product of
/// two representations.
pub trait Representation:
    sealed::Sealed
    + Copy
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Type name used in error messages, e.g. `"i32"`
    const NAME: &'static str;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const NEG_ONE: Self;

    fn to_i128(self) -> i128;

    /// Narrowing conversion, `None` if out of range.
    fn from_i128(value: i128) -> Option<Self>;

    /// Narrowing conversion keeping the low bits (two's complement wrap).
    fn from_i128_wrapping(value: i128) -> Self;

    fn to_f64(self) -> f64;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Panics on a zero divisor, like the primitive operation.
    fn wrapping_div(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
}

macro_rules! impl_representation {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Representation for $t {
                const NAME: &'static str = stringify!($t);
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const NEG_ONE: Self = -1;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline]
                fn from_i128_wrapping(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$t>::wrapping_div(self, rhs)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_representation!(i8, i16, i32, i64);
