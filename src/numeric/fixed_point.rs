// ============================================================================
// Fixed-Point Value
// Scale-tracked integer with a compile-time radix and representation width
// ============================================================================

use super::errors::{NumericError, NumericResult, Operation};
use super::native::Native;
use super::overflow::{
    addition_overflow, division_overflow, multiplication_overflow, subtraction_overflow,
};
use super::radix::{Base10, Base2, Radix, RadixKind};
use super::representation::Representation;
use super::scale::ScaleExponent;
use super::shift::{align, shift_by, shift_float_by, Aligned};
use crate::config::{ArithmeticConfig, OverflowPolicy, RoundingMode};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unscaled value paired with its scale, taken verbatim by
/// [`FixedPoint::from`] without shifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledInteger<Rep> {
    pub value: Rep,
    pub scale: ScaleExponent,
}

impl<Rep> ScaledInteger<Rep> {
    #[inline]
    pub const fn new(value: Rep, scale: ScaleExponent) -> Self {
        Self { value, scale }
    }
}

/// Fixed-point number: an unscaled signed integer and a scale exponent.
///
/// Constructing from a native number stores `shift(value, scale)`: a positive
/// scale divides the input by `RADIX^scale`, a negative scale multiplies it by
/// `RADIX^-scale`. Converting back applies the inverse shift, so the native
/// value is `unscaled × RADIX^scale`.
///
/// Operands of a binary operation must share `Rep` and `Rad`; anything else
/// does not type-check.
///
/// # Type Parameters
/// - `Rep`: storage for the unscaled value (`i8`, `i16`, `i32` or `i64`)
/// - `Rad`: [`Base10`] or [`Base2`]
///
/// # Example
/// ```
/// use fixed_point::numeric::{Decimal32, ScaleExponent};
///
/// let price = Decimal32::from_value_and_scale(125, ScaleExponent::new(-2))?;
/// assert_eq!(price.unscaled_value(), 12_500);
/// assert_eq!(price.to::<i32>()?, 125);
///
/// let fee = Decimal32::from_value_and_scale(0.25, ScaleExponent::new(-2))?;
/// assert_eq!((price + fee).to_string(), "125.25");
/// # Ok::<(), fixed_point::numeric::NumericError>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "Rep: Serialize", deserialize = "Rep: Deserialize<'de>"))
)]
pub struct FixedPoint<Rep: Representation, Rad: Radix> {
    scale: ScaleExponent,
    value: Rep,
    #[cfg_attr(feature = "serde", serde(skip))]
    radix: PhantomData<Rad>,
}

/// Native value of a [`FixedPoint`]: an integer when the value is whole,
/// otherwise the nearest `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BestRepresentation {
    Integer(i128),
    Float(f64),
}

impl fmt::Display for BestRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BestRepresentation::Integer(value) => write!(f, "{}", value),
            BestRepresentation::Float(value) => write!(f, "{}", value),
        }
    }
}

// ============================================================================
// Construction and Accessors
// ============================================================================

impl<Rep: Representation, Rad: Radix> FixedPoint<Rep, Rad> {
    /// Create from a native number, shifting it to `scale`.
    ///
    /// Integer inputs are shifted exactly (truncating toward zero when the
    /// scale is positive); float inputs are rounded to the nearest unscaled
    /// value.
    ///
    /// # Errors
    /// - `Overflow` if the shifted value does not fit `Rep`
    /// - `InvalidInput` for NaN or infinite floats
    pub fn from_value_and_scale<T: Native>(value: T, scale: ScaleExponent) -> NumericResult<Self> {
        let unscaled = value.scale_in::<Rad>(scale).map_err(|err| match err {
            NumericError::Overflow { .. } => NumericError::overflow(Rep::NAME, Operation::Shift),
            other => other,
        })?;

        Rep::from_i128(unscaled)
            .map(|value| Self::from_scaled(value, scale))
            .ok_or(NumericError::overflow(Rep::NAME, Operation::Shift))
    }

    /// Create from an already scaled value. No shift is applied.
    #[inline]
    pub const fn from_scaled(value: Rep, scale: ScaleExponent) -> Self {
        Self {
            scale,
            value,
            radix: PhantomData,
        }
    }

    /// Zero at the given scale.
    #[inline]
    pub const fn zero(scale: ScaleExponent) -> Self {
        Self::from_scaled(Rep::ZERO, scale)
    }

    #[inline]
    pub fn unscaled_value(self) -> Rep {
        self.value
    }

    #[inline]
    pub fn scale(self) -> ScaleExponent {
        self.scale
    }

    #[inline]
    pub fn radix(self) -> RadixKind {
        Rad::KIND
    }

    #[inline]
    pub fn into_scaled(self) -> ScaledInteger<Rep> {
        ScaledInteger::new(self.value, self.scale)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.value == Rep::ZERO
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.value > Rep::ZERO
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.value < Rep::ZERO
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to a native number by reversing the construction shift.
    ///
    /// Integer targets truncate toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit `T`.
    #[inline]
    pub fn to<T: Native>(self) -> NumericResult<T> {
        T::scale_out::<Rad>(self.value.to_i128(), self.scale)
    }

    /// Nearest `f64` to the represented value.
    #[inline]
    pub fn to_f64(self) -> f64 {
        shift_float_by::<Rad>(self.value.to_f64(), -(self.scale.get() as i64))
    }

    /// The represented value as an integer when it is whole, otherwise as a
    /// float.
    ///
    /// The candidate integer is re-expanded by the stored scale and must
    /// reproduce the unscaled value exactly.
    pub fn best_representation(self) -> BestRepresentation {
        let unscaled = self.value.to_i128();
        let exponent = -(self.scale.get() as i64);

        match shift_by::<Rad>(unscaled, exponent) {
            Some(candidate) if shift_by::<Rad>(candidate, -exponent) == Some(unscaled) => {
                BestRepresentation::Integer(candidate)
            },
            _ => BestRepresentation::Float(self.to_f64()),
        }
    }

    /// Express the same value at another scale.
    ///
    /// Moving to a larger scale truncates digits toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit `Rep` at the new scale.
    pub fn rescale(self, scale: ScaleExponent) -> NumericResult<Self> {
        shift_by::<Rad>(self.value.to_i128(), scale.distance(self.scale))
            .and_then(Rep::from_i128)
            .map(|value| Self::from_scaled(value, scale))
            .ok_or(NumericError::overflow(Rep::NAME, Operation::Shift))
    }

    // ========================================================================
    // Addition and Subtraction
    // ========================================================================

    /// Checked addition.
    ///
    /// Both operands are brought to the larger of the two scales; the operand
    /// with the smaller scale is shifted, the other used as is.
    ///
    /// # Errors
    /// Returns `Overflow` if the aligned sum does not fit `Rep`.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.add_with_policy(rhs, OverflowPolicy::Checked)
    }

    /// Unchecked addition: wraps around the bounds of `Rep`.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let aligned = self.aligned(rhs);
        Self::from_scaled(aligned.lhs.wrapping_add(aligned.rhs), aligned.scale)
    }

    pub fn add_with_policy(self, rhs: Self, policy: OverflowPolicy) -> NumericResult<Self> {
        let aligned = self.aligned(rhs);
        if policy == OverflowPolicy::Checked && addition_overflow(aligned.lhs, aligned.rhs) {
            return Err(overflow_detected::<Rep>(Operation::Addition));
        }
        Ok(Self::from_scaled(
            aligned.lhs.wrapping_add(aligned.rhs),
            aligned.scale,
        ))
    }

    #[inline]
    pub fn add_with(self, rhs: Self, config: &ArithmeticConfig) -> NumericResult<Self> {
        self.add_with_policy(rhs, config.overflow)
    }

    /// Checked subtraction. Scales are aligned as for [`checked_add`](Self::checked_add).
    ///
    /// # Errors
    /// Returns `Overflow` if the aligned difference does not fit `Rep`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.sub_with_policy(rhs, OverflowPolicy::Checked)
    }

    /// Unchecked subtraction: wraps around the bounds of `Rep`.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let aligned = self.aligned(rhs);
        Self::from_scaled(aligned.lhs.wrapping_sub(aligned.rhs), aligned.scale)
    }

    pub fn sub_with_policy(self, rhs: Self, policy: OverflowPolicy) -> NumericResult<Self> {
        let aligned = self.aligned(rhs);
        if policy == OverflowPolicy::Checked && subtraction_overflow(aligned.lhs, aligned.rhs) {
            return Err(overflow_detected::<Rep>(Operation::Subtraction));
        }
        Ok(Self::from_scaled(
            aligned.lhs.wrapping_sub(aligned.rhs),
            aligned.scale,
        ))
    }

    #[inline]
    pub fn sub_with(self, rhs: Self, config: &ArithmeticConfig) -> NumericResult<Self> {
        self.sub_with_policy(rhs, config.overflow)
    }

    fn aligned(self, rhs: Self) -> Aligned<Rep> {
        let aligned = align::<Rep, Rad>((self.value, self.scale), (rhs.value, rhs.scale));
        if aligned.truncated {
            tracing::trace!(
                representation = Rep::NAME,
                lhs_scale = self.scale.get(),
                rhs_scale = rhs.scale.get(),
                "scale alignment truncated digits"
            );
        }
        aligned
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Checked multiplication. The result scale is the sum of the operand
    /// scales.
    ///
    /// # Errors
    /// - `Overflow` if the product does not fit `Rep`
    /// - `ScaleOutOfRange` if the scale sum leaves `i32`
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.mul_with_policy(rhs, OverflowPolicy::Checked)
    }

    /// Unchecked multiplication: wraps around the bounds of `Rep` (and of the
    /// `i32` scale).
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_scaled(
            self.value.wrapping_mul(rhs.value),
            self.scale.wrapping_add(rhs.scale),
        )
    }

    pub fn mul_with_policy(self, rhs: Self, policy: OverflowPolicy) -> NumericResult<Self> {
        let scale = self.scale.checked_add(rhs.scale)?;
        if policy == OverflowPolicy::Checked && multiplication_overflow(self.value, rhs.value) {
            return Err(overflow_detected::<Rep>(Operation::Multiplication));
        }
        Ok(Self::from_scaled(self.value.wrapping_mul(rhs.value), scale))
    }

    #[inline]
    pub fn mul_with(self, rhs: Self, config: &ArithmeticConfig) -> NumericResult<Self> {
        self.mul_with_policy(rhs, config.overflow)
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Checked division of the unscaled values, truncating toward zero. The
    /// result scale is `self.scale - rhs.scale`.
    ///
    /// This keeps only the digits that survive integer division at that
    /// scale; use [`div_to_scale`](Self::div_to_scale) or
    /// [`div_with`](Self::div_with) to keep more.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` for `MIN / -1`
    /// - `ScaleOutOfRange` if the scale difference leaves `i32`
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        self.div_with_policy(rhs, OverflowPolicy::Checked)
    }

    /// Unchecked division: `MIN / -1` wraps to `MIN`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero, like primitive integer division.
    #[inline]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        Self::from_scaled(
            self.value.wrapping_div(rhs.value),
            self.scale.wrapping_sub(rhs.scale),
        )
    }

    pub fn div_with_policy(self, rhs: Self, policy: OverflowPolicy) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(division_by_zero::<Rep>());
        }
        let scale = self.scale.checked_sub(rhs.scale)?;
        if policy == OverflowPolicy::Checked && division_overflow(self.value, rhs.value) {
            return Err(overflow_detected::<Rep>(Operation::Division));
        }
        Ok(Self::from_scaled(self.value.wrapping_div(rhs.value), scale))
    }

    /// Checked division producing the quotient at `scale`.
    ///
    /// The dividend is widened to `i128` and shifted so that the quotient
    /// lands on the requested scale before dividing; `rounding` decides the
    /// last digit. Choosing a scale below `self.scale - rhs.scale` keeps
    /// digits that plain [`checked_div`](Self::checked_div) would drop.
    ///
    /// # Example
    /// ```
    /// use fixed_point::config::RoundingMode;
    /// use fixed_point::numeric::{Decimal64, ScaleExponent};
    ///
    /// let one = Decimal64::from_value_and_scale(1, ScaleExponent::ZERO)?;
    /// let three = Decimal64::from_value_and_scale(3, ScaleExponent::ZERO)?;
    ///
    /// assert_eq!(one.checked_div(three)?.to_string(), "0");
    ///
    /// let third = one.div_to_scale(three, ScaleExponent::new(-4), RoundingMode::HalfAwayFromZero)?;
    /// assert_eq!(third.unscaled_value(), 3_333);
    /// assert_eq!(third.to_string(), "0.3333");
    /// # Ok::<(), fixed_point::numeric::NumericError>(())
    /// ```
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient does not fit `Rep` at `scale`
    #[inline]
    pub fn div_to_scale(
        self,
        rhs: Self,
        scale: ScaleExponent,
        rounding: RoundingMode,
    ) -> NumericResult<Self> {
        self.divide_to_scale(rhs, scale, rounding, OverflowPolicy::Checked)
    }

    /// Division driven by a configuration: the quotient keeps
    /// `config.division_guard_digits` more digits than `self.scale - rhs.scale`,
    /// rounded and overflow-checked as configured.
    ///
    /// With the default configuration this matches
    /// [`checked_div`](Self::checked_div).
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `ScaleOutOfRange` if the result scale leaves `i32`
    /// - `Overflow` if the widened `i128` dividend overflows. This holds under
    ///   `OverflowPolicy::Unchecked` as well: only narrowing the quotient to
    ///   `Rep` wraps, since a wrapped `i128` intermediate has no meaningful
    ///   quotient.
    pub fn div_with(self, rhs: Self, config: &ArithmeticConfig) -> NumericResult<Self> {
        let guard = i32::try_from(config.division_guard_digits)
            .map_err(|_| NumericError::ScaleOutOfRange)?;
        let scale = self
            .scale
            .checked_sub(rhs.scale)?
            .checked_sub(ScaleExponent::new(guard))?;
        self.divide_to_scale(rhs, scale, config.rounding, config.overflow)
    }

    fn divide_to_scale(
        self,
        rhs: Self,
        scale: ScaleExponent,
        rounding: RoundingMode,
        policy: OverflowPolicy,
    ) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(division_by_zero::<Rep>());
        }

        if self.is_zero() {
            return Ok(Self::zero(scale));
        }

        let dividend = self.value.to_i128();
        let divisor = rhs.value.to_i128();
        // quotient = dividend * RADIX^exponent / divisor lands on `scale`
        let exponent = self.scale.distance(rhs.scale) - scale.get() as i64;

        let quotient = if exponent >= 0 {
            Rad::power(exponent.unsigned_abs())
                .and_then(|factor| dividend.checked_mul(factor))
                .and_then(|widened| divide_rounded(widened, divisor, rounding))
        } else {
            match Rad::power(exponent.unsigned_abs()).and_then(|factor| divisor.checked_mul(factor)) {
                Some(widened) => divide_rounded(dividend, widened, rounding),
                // |divisor| beyond i128 dwarfs any dividend: the quotient rounds to zero
                None => Some(0),
            }
        }
        .ok_or_else(|| overflow_detected::<Rep>(Operation::Division))?;

        let value = match policy {
            OverflowPolicy::Checked => Rep::from_i128(quotient)
                .ok_or_else(|| overflow_detected::<Rep>(Operation::Division))?,
            OverflowPolicy::Unchecked => Rep::from_i128_wrapping(quotient),
        };
        Ok(Self::from_scaled(value, scale))
    }

    // ========================================================================
    // Negation
    // ========================================================================

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        if self.value == Rep::MIN {
            return Err(overflow_detected::<Rep>(Operation::Negation));
        }
        Ok(Self::from_scaled(-self.value, self.scale))
    }

    /// Unchecked negation: `MIN` stays `MIN`.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self::from_scaled(self.value.wrapping_neg(), self.scale)
    }

    pub fn neg_with_policy(self, policy: OverflowPolicy) -> NumericResult<Self> {
        match policy {
            OverflowPolicy::Checked => self.checked_neg(),
            OverflowPolicy::Unchecked => Ok(self.wrapping_neg()),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare represented values, independent of the stored scales.
    fn compare(self, other: Self) -> Ordering {
        let lhs = self.value.to_i128();
        let rhs = other.value.to_i128();

        let by_sign = lhs.signum().cmp(&rhs.signum());
        if by_sign != Ordering::Equal || lhs == 0 {
            return by_sign;
        }

        // Same sign, both non-zero: bring the operand with the larger scale
        // down to the smaller one. A shift that leaves i128 dominates.
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => lhs.cmp(&rhs),
            Ordering::Greater => match shift_by::<Rad>(lhs, -self.scale.distance(other.scale)) {
                Some(lhs) => lhs.cmp(&rhs),
                None => lhs.signum().cmp(&0i128),
            },
            Ordering::Less => match shift_by::<Rad>(rhs, -other.scale.distance(self.scale)) {
                Some(rhs) => lhs.cmp(&rhs),
                None => 0i128.cmp(&rhs.signum()),
            },
        }
    }

    /// Unscaled value and scale with trailing radix factors removed; equal
    /// values share one normal form.
    fn normalized(self) -> (i128, i64) {
        let mut value = self.value.to_i128();
        let mut scale = self.scale.get() as i64;
        if value == 0 {
            return (0, 0);
        }
        let base = Rad::KIND.base() as i128;
        while value % base == 0 {
            value /= base;
            scale += 1;
        }
        (value, scale)
    }
}

/// `numerator / denominator` rounded per `rounding`; `None` only for
/// `i128::MIN / -1`.
fn divide_rounded(numerator: i128, denominator: i128, rounding: RoundingMode) -> Option<i128> {
    let quotient = numerator.checked_div(denominator)?;
    match rounding {
        RoundingMode::TruncateTowardZero => Some(quotient),
        RoundingMode::HalfAwayFromZero => {
            let remainder = numerator.checked_rem(denominator)?;
            // |remainder| < |denominator| <= 2^127, so doubling fits u128
            if remainder.unsigned_abs() * 2 >= denominator.unsigned_abs() {
                if (numerator < 0) != (denominator < 0) {
                    quotient.checked_sub(1)
                } else {
                    quotient.checked_add(1)
                }
            } else {
                Some(quotient)
            }
        },
    }
}

#[cold]
fn overflow_detected<Rep: Representation>(operation: Operation) -> NumericError {
    tracing::debug!(
        representation = Rep::NAME,
        %operation,
        "fixed_point overflow detected"
    );
    NumericError::overflow(Rep::NAME, operation)
}

#[cold]
fn division_by_zero<Rep: Representation>() -> NumericError {
    tracing::debug!(representation = Rep::NAME, "fixed_point division by zero");
    NumericError::DivisionByZero
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<Rep: Representation, Rad: Radix> Clone for FixedPoint<Rep, Rad> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Rep: Representation, Rad: Radix> Copy for FixedPoint<Rep, Rad> {}

impl<Rep: Representation, Rad: Radix> From<ScaledInteger<Rep>> for FixedPoint<Rep, Rad> {
    #[inline]
    fn from(scaled: ScaledInteger<Rep>) -> Self {
        Self::from_scaled(scaled.value, scaled.scale)
    }
}

impl<Rep: Representation, Rad: Radix> Default for FixedPoint<Rep, Rad> {
    #[inline]
    fn default() -> Self {
        Self::zero(ScaleExponent::ZERO)
    }
}

impl<Rep: Representation, Rad: Radix> PartialEq for FixedPoint<Rep, Rad> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl<Rep: Representation, Rad: Radix> Eq for FixedPoint<Rep, Rad> {}

impl<Rep: Representation, Rad: Radix> PartialOrd for FixedPoint<Rep, Rad> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(*other))
    }
}

impl<Rep: Representation, Rad: Radix> Ord for FixedPoint<Rep, Rad> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl<Rep: Representation, Rad: Radix> Hash for FixedPoint<Rep, Rad> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl<Rep: Representation, Rad: Radix> Neg for FixedPoint<Rep, Rad> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("FixedPoint negation overflow")
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in production)
impl<Rep: Representation, Rad: Radix> Add for FixedPoint<Rep, Rad> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedPoint addition overflow")
    }
}

impl<Rep: Representation, Rad: Radix> Sub for FixedPoint<Rep, Rad> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedPoint subtraction overflow")
    }
}

impl<Rep: Representation, Rad: Radix> Mul for FixedPoint<Rep, Rad> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("FixedPoint multiplication overflow")
    }
}

impl<Rep: Representation, Rad: Radix> Div for FixedPoint<Rep, Rad> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("FixedPoint division failed")
    }
}

impl<Rep: Representation, Rad: Radix> AddAssign for FixedPoint<Rep, Rad> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Rep: Representation, Rad: Radix> SubAssign for FixedPoint<Rep, Rad> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Rep: Representation, Rad: Radix> MulAssign for FixedPoint<Rep, Rad> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<Rep: Representation, Rad: Radix> DivAssign for FixedPoint<Rep, Rad> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<Rep: Representation, Rad: Radix> fmt::Debug for FixedPoint<Rep, Rad> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedPoint<{}, {}>({}, raw={}, scale={})",
            Rep::NAME,
            Rad::KIND,
            self,
            self.value,
            self.scale
        )
    }
}

impl<Rep: Representation, Rad: Radix> fmt::Display for FixedPoint<Rep, Rad> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.best_representation())
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

pub type Decimal8 = FixedPoint<i8, Base10>;
pub type Decimal16 = FixedPoint<i16, Base10>;
/// 32-bit decimal, e.g. currency amounts in cents at scale -2
pub type Decimal32 = FixedPoint<i32, Base10>;
pub type Decimal64 = FixedPoint<i64, Base10>;

pub type Binary8 = FixedPoint<i8, Base2>;
pub type Binary16 = FixedPoint<i16, Base2>;
pub type Binary32 = FixedPoint<i32, Base2>;
pub type Binary64 = FixedPoint<i64, Base2>;

// ============================================================================
// Tests
// ============================================================================
