// ============================================================================
// Native Numbers
// Primitive integer and floating-point types a fixed-point value converts with
// ============================================================================

use super::errors::{NumericError, NumericResult, Operation};
use super::radix::Radix;
use super::shift::{shift_by, shift_float_by};
use super::scale::ScaleExponent;

mod sealed {
    pub trait Sealed {}
}

/// A primitive number that can be shifted into, or recovered from, a scaled
/// integer.
///
/// Integers shift exactly. Floats shift in `f64` and round to the nearest
/// integer (ties away from zero) when entering the scaled domain.
pub trait Native: sealed::Sealed + Copy {
    /// Type name used in error messages
    const NAME: &'static str;

    /// `shift(self, scale)` in the `i128` domain.
    #[doc(hidden)]
    fn scale_in<R: Radix>(self, scale: ScaleExponent) -> NumericResult<i128>;

    /// `shift(unscaled, -scale)` converted to `Self`.
    #[doc(hidden)]
    fn scale_out<R: Radix>(unscaled: i128, scale: ScaleExponent) -> NumericResult<Self>;
}

macro_rules! impl_native_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Native for $t {
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn scale_in<R: Radix>(self, scale: ScaleExponent) -> NumericResult<i128> {
                    let wide = i128::try_from(self)
                        .map_err(|_| NumericError::overflow("i128", Operation::Shift))?;
                    shift_by::<R>(wide, scale.get() as i64)
                        .ok_or(NumericError::overflow("i128", Operation::Shift))
                }

                #[inline]
                fn scale_out<R: Radix>(unscaled: i128, scale: ScaleExponent) -> NumericResult<Self> {
                    shift_by::<R>(unscaled, -(scale.get() as i64))
                        .and_then(|native| <$t>::try_from(native).ok())
                        .ok_or(NumericError::overflow(Self::NAME, Operation::Conversion))
                }
            }
        )*
    };
}

impl_native_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

// 2^127, exactly representable as f64
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

#[inline]
fn float_scale_in<R: Radix>(value: f64, scale: ScaleExponent) -> NumericResult<i128> {
    if !value.is_finite() {
        return Err(NumericError::InvalidInput);
    }
    let scaled = shift_float_by::<R>(value, scale.get() as i64).round();
    if scaled >= I128_BOUND || scaled < -I128_BOUND {
        return Err(NumericError::overflow("i128", Operation::Shift));
    }
    Ok(scaled as i128)
}

#[inline]
fn float_scale_out<R: Radix>(unscaled: i128, scale: ScaleExponent) -> f64 {
    shift_float_by::<R>(unscaled as f64, -(scale.get() as i64))
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

impl Native for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn scale_in<R: Radix>(self, scale: ScaleExponent) -> NumericResult<i128> {
        float_scale_in::<R>(self, scale)
    }

    #[inline]
    fn scale_out<R: Radix>(unscaled: i128, scale: ScaleExponent) -> NumericResult<Self> {
        Ok(float_scale_out::<R>(unscaled, scale))
    }
}

impl Native for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    fn scale_in<R: Radix>(self, scale: ScaleExponent) -> NumericResult<i128> {
        float_scale_in::<R>(self as f64, scale)
    }

    #[inline]
    fn scale_out<R: Radix>(unscaled: i128, scale: ScaleExponent) -> NumericResult<Self> {
        Ok(float_scale_out::<R>(unscaled, scale) as f32)
    }
}
