// ============================================================================
// Shift / Scale Alignment
// Exact multiplication and division by powers of the radix
// ============================================================================
//
// A non-negative scale divides (right shift), a negative scale multiplies
// (left shift). Everything is computed in i128 against the radix power
// tables; nothing goes through floating-point `pow`.

use super::radix::Radix;
use super::representation::Representation;
use super::scale::ScaleExponent;

/// `value / RADIX^scale` for `scale >= 0`, `value * RADIX^-scale` otherwise.
///
/// Division truncates toward zero. Returns `None` if a left shift leaves the
/// `i128` range.
///
/// # Example
/// ```
/// use fixed_point::numeric::{shift, Base10, ScaleExponent};
///
/// assert_eq!(shift::<Base10>(125, ScaleExponent::new(-2)), Some(12_500));
/// assert_eq!(shift::<Base10>(12_599, ScaleExponent::new(2)), Some(125));
/// ```
#[inline]
pub fn shift<R: Radix>(value: i128, scale: ScaleExponent) -> Option<i128> {
    shift_by::<R>(value, scale.get() as i64)
}

/// [`shift`] with a widened exponent, so `-scale` never overflows.
#[inline]
pub(crate) fn shift_by<R: Radix>(value: i128, exponent: i64) -> Option<i128> {
    if exponent >= 0 {
        Some(right_shift::<R>(value, exponent.unsigned_abs()))
    } else {
        left_shift::<R>(value, exponent.unsigned_abs())
    }
}

#[inline]
fn right_shift<R: Radix>(value: i128, exponent: u64) -> i128 {
    match R::power(exponent) {
        Some(divisor) => value / divisor,
        // divisor exceeds every i128 in magnitude
        None => 0,
    }
}

#[inline]
fn left_shift<R: Radix>(value: i128, exponent: u64) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    R::power(exponent).and_then(|factor| value.checked_mul(factor))
}

/// Floating-point counterpart of [`shift`] for native float inputs and outputs.
///
/// Divides by the power rather than multiplying by its reciprocal, so values
/// such as `3 / 10` come out correctly rounded.
#[inline]
pub fn shift_float<R: Radix>(value: f64, scale: ScaleExponent) -> f64 {
    shift_float_by::<R>(value, scale.get() as i64)
}

#[inline]
pub(crate) fn shift_float_by<R: Radix>(value: f64, exponent: i64) -> f64 {
    if value == 0.0 {
        return value;
    }
    let power = R::power_f64(exponent.unsigned_abs());
    if exponent >= 0 {
        value / power
    } else {
        value * power
    }
}

/// Operands of an addition or subtraction brought to a common scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Aligned<Rep> {
    pub lhs: Rep,
    pub rhs: Rep,
    pub scale: ScaleExponent,
    /// Non-zero digits were truncated from the finer operand
    pub truncated: bool,
}

/// Bring two operands to the larger of their scales.
///
/// The operand with the smaller scale is right-shifted by the difference; the
/// other is used as is. Right shifts only shrink magnitudes, so this never
/// overflows `Rep`.
pub(crate) fn align<Rep: Representation, R: Radix>(
    lhs: (Rep, ScaleExponent),
    rhs: (Rep, ScaleExponent),
) -> Aligned<Rep> {
    let (lhs_value, lhs_scale) = lhs;
    let (rhs_value, rhs_scale) = rhs;
    let scale = lhs_scale.max(rhs_scale);

    let (lhs_shifted, lhs_truncated) = shift_to::<Rep, R>(lhs_value, scale.distance(lhs_scale));
    let (rhs_shifted, rhs_truncated) = shift_to::<Rep, R>(rhs_value, scale.distance(rhs_scale));

    Aligned {
        lhs: lhs_shifted,
        rhs: rhs_shifted,
        scale,
        truncated: lhs_truncated || rhs_truncated,
    }
}

#[inline]
fn shift_to<Rep: Representation, R: Radix>(value: Rep, exponent: i64) -> (Rep, bool) {
    if exponent == 0 {
        return (value, false);
    }
    let wide = value.to_i128();
    let shifted = right_shift::<R>(wide, exponent.unsigned_abs());
    let truncated = left_shift::<R>(shifted, exponent.unsigned_abs()) != Some(wide);
    // |shifted| <= |value|, so this narrowing is exact
    (Rep::from_i128_wrapping(shifted), truncated)
}
