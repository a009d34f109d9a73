// ============================================================================
// Radix
// Compile-time base for interpreting a scale exponent
// ============================================================================

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// Runtime description of a radix, for reporting and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RadixKind {
    Base2,
    Base10,
}

impl RadixKind {
    pub const fn base(self) -> u32 {
        match self {
            RadixKind::Base2 => 2,
            RadixKind::Base10 => 10,
        }
    }
}

impl fmt::Display for RadixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

/// Base of exponentiation for a scale. Implemented by [`Base2`] and [`Base10`] only.
///
/// Each radix carries the table of its powers that fit an `i128`, so shifting
/// never goes through floating point.
pub trait Radix:
    sealed::Sealed + Copy + fmt::Debug + Default + Eq + Hash + Send + Sync + 'static
{
    const KIND: RadixKind;

    /// `BASE^0 ..= BASE^n` for the largest `n` with `BASE^n <= i128::MAX`
    const POWERS: &'static [i128];

    /// `BASE^exponent`, or `None` once the power no longer fits an `i128`.
    #[inline]
    fn power(exponent: u64) -> Option<i128> {
        usize::try_from(exponent)
            .ok()
            .and_then(|i| Self::POWERS.get(i))
            .copied()
    }

    /// `BASE^exponent` as `f64`. Saturates to infinity for huge exponents.
    #[inline]
    fn power_f64(exponent: u64) -> f64 {
        let exponent = i32::try_from(exponent).unwrap_or(i32::MAX);
        (Self::KIND.base() as f64).powi(exponent)
    }
}

/// Compute `base^0 ..= base^(N-1)` at compile time
const fn power_table<const N: usize>(base: i128) -> [i128; N] {
    let mut table = [1i128; N];
    let mut i = 1;
    while i < N {
        table[i] = table[i - 1] * base;
        i += 1;
    }
    table
}

// 10^38 < i128::MAX < 10^39
const POWERS_OF_10: [i128; 39] = power_table::<39>(10);
// 2^126 < i128::MAX < 2^127
const POWERS_OF_2: [i128; 127] = power_table::<127>(2);

/// Binary radix: scale counts bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Base2;

/// Decimal radix: scale counts decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Base10;

impl sealed::Sealed for Base2 {}
impl sealed::Sealed for Base10 {}

impl Radix for Base2 {
    const KIND: RadixKind = RadixKind::Base2;
    const POWERS: &'static [i128] = &POWERS_OF_2;
}

impl Radix for Base10 {
    const KIND: RadixKind = RadixKind::Base10;
    const POWERS: &'static [i128] = &POWERS_OF_10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_tables() {
        assert_eq!(Base10::power(0), Some(1));
        assert_eq!(Base10::power(3), Some(1_000));
        assert_eq!(Base10::power(38), Some(10i128.pow(38)));
        assert_eq!(Base10::power(39), None);

        assert_eq!(Base2::power(10), Some(1_024));
        assert_eq!(Base2::power(126), Some(1i128 << 126));
        assert_eq!(Base2::power(127), None);
        assert_eq!(Base2::power(u64::MAX), None);
    }

    #[test]
    fn test_power_f64() {
        assert_eq!(Base10::power_f64(2), 100.0);
        assert_eq!(Base2::power_f64(3), 8.0);
        assert!(Base10::power_f64(u64::MAX).is_infinite());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Base2::KIND.base(), 2);
        assert_eq!(Base10::KIND.to_string(), "10");
    }
}
