// ============================================================================
// Decimal Interop
// String parsing and rust_decimal conversion for radix-10 values
// ============================================================================

use super::errors::{NumericError, NumericResult, Operation};
use super::fixed_point::FixedPoint;
use super::radix::Base10;
use super::representation::Representation;
use super::scale::ScaleExponent;
use super::shift::shift_by;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest scale `rust_decimal::Decimal` supports
const DECIMAL_MAX_SCALE: i64 = 28;

// ============================================================================
// Conversion from/to rust_decimal (for API boundaries)
// ============================================================================

impl<Rep: Representation> FixedPoint<Rep, Base10> {
    /// Convert from `rust_decimal::Decimal`, keeping its digits exactly.
    ///
    /// The mantissa becomes the unscaled value and the decimal scale `k`
    /// becomes scale `-k`. Trailing zeros are dropped when the mantissa would
    /// not fit `Rep` otherwise.
    ///
    /// # Errors
    /// Returns `Overflow` if the significant digits do not fit `Rep`.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        match Self::from_mantissa(d) {
            Some(value) => Ok(value),
            None => Self::from_mantissa(d.normalize())
                .ok_or(NumericError::overflow(Rep::NAME, Operation::Conversion)),
        }
    }

    fn from_mantissa(d: Decimal) -> Option<Self> {
        let value = Rep::from_i128(d.mantissa())?;
        let scale = i32::try_from(d.scale()).ok()?;
        Some(Self::from_scaled(value, ScaleExponent::new(-scale)))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has more than 28 fractional digits
    /// - `Overflow` if the value exceeds the 96-bit decimal mantissa
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let overflow = NumericError::overflow("Decimal", Operation::Conversion);
        let mut unscaled = self.unscaled_value().to_i128();
        let mut exponent = self.scale().get() as i64;

        if unscaled == 0 {
            return Ok(Decimal::ZERO);
        }
        if exponent > 0 {
            unscaled = shift_by::<Base10>(unscaled, -exponent).ok_or(overflow)?;
            exponent = 0;
        }
        // drop trailing zeros that push past the supported scale
        while -exponent > DECIMAL_MAX_SCALE && unscaled % 10 == 0 {
            unscaled /= 10;
            exponent += 1;
        }
        if -exponent > DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        Decimal::try_from_i128_with_scale(unscaled, (-exponent) as u32).map_err(|_| overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<Rep: Representation> FromStr for FixedPoint<Rep, Base10> {
    type Err = NumericError;

    /// Parse a decimal string, keeping every written digit.
    ///
    /// # Examples
    /// - "123" -> raw 123, scale 0
    /// - "-123.45" -> raw -12345, scale -2
    /// - "0.50" -> raw 50, scale -2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let overflow = NumericError::overflow(Rep::NAME, Operation::Conversion);
        let mut unscaled: i128 = 0;
        for c in int_str.chars().chain(frac_str.chars()) {
            let digit = c.to_digit(10).ok_or(NumericError::InvalidInput)?;
            unscaled = unscaled
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as i128))
                .ok_or(overflow)?;
        }
        if is_negative {
            unscaled = -unscaled;
        }

        let frac_digits = i32::try_from(frac_str.len()).map_err(|_| NumericError::ScaleOutOfRange)?;
        let value = Rep::from_i128(unscaled).ok_or(overflow)?;
        Ok(Self::from_scaled(value, ScaleExponent::new(-frac_digits)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::fixed_point::{Decimal16, Decimal32, Decimal64};

    fn s(exponent: i32) -> ScaleExponent {
        ScaleExponent::new(exponent)
    }

    #[test]
    fn test_from_str() {
        let x: Decimal32 = "-123.45".parse().unwrap();
        assert_eq!(x.unscaled_value(), -12_345);
        assert_eq!(x.scale(), s(-2));

        let y: Decimal32 = "42".parse().unwrap();
        assert_eq!((y.unscaled_value(), y.scale()), (42, s(0)));

        let z: Decimal32 = " +.5 ".parse().unwrap();
        assert_eq!((z.unscaled_value(), z.scale()), (5, s(-1)));

        let w: Decimal32 = "7.".parse().unwrap();
        assert_eq!((w.unscaled_value(), w.scale()), (7, s(0)));

        // trailing zeros keep their scale
        let h: Decimal32 = "0.50".parse().unwrap();
        assert_eq!((h.unscaled_value(), h.scale()), (50, s(-2)));
        assert_eq!(h.to_string(), "0.5");
    }

    #[test]
    fn test_from_str_invalid() {
        for input in ["", "-", ".", "abc", "1.2.3", "1e5", "--1", "1 000"] {
            let result: Result<Decimal32, _> = input.parse();
            assert_eq!(result, Err(NumericError::InvalidInput), "input {:?}", input);
        }
    }

    #[test]
    fn test_from_str_overflow() {
        let result: Result<Decimal16, _> = "327.68".parse();
        assert_eq!(
            result,
            Err(NumericError::overflow("i16", Operation::Conversion))
        );
        let ok: Decimal16 = "-327.68".parse().unwrap();
        assert_eq!(ok.unscaled_value(), i16::MIN);

        let huge = "9".repeat(60);
        let result: Result<Decimal64, _> = huge.parse();
        assert_eq!(
            result,
            Err(NumericError::overflow("i64", Operation::Conversion))
        );
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12_345, 2); // 123.45
        let x = Decimal32::from_decimal(d).unwrap();
        assert_eq!(x.unscaled_value(), 12_345);
        assert_eq!(x.scale(), s(-2));
        assert_eq!(x.to::<f64>(), Ok(123.45));
    }

    #[test]
    fn test_from_decimal_drops_trailing_zeros_when_needed() {
        // 1.000000000000 does not fit i16 as written
        let d = Decimal::new(1_000_000_000_000, 12);
        let x = Decimal16::from_decimal(d).unwrap();
        assert_eq!((x.unscaled_value(), x.scale()), (1, s(0)));

        assert_eq!(
            Decimal16::from_decimal(Decimal::new(1_234_567, 3)),
            Err(NumericError::overflow("i16", Operation::Conversion))
        );
    }

    #[test]
    fn test_to_decimal() {
        let x = Decimal64::from_scaled(123_456, s(-3));
        assert_eq!(x.to_decimal().unwrap().to_string(), "123.456");

        let y = Decimal64::from_scaled(-12, s(3));
        assert_eq!(y.to_decimal(), Ok(Decimal::new(-12_000, 0)));

        assert_eq!(Decimal64::zero(s(-40)).to_decimal(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_to_decimal_limits() {
        assert_eq!(
            Decimal64::from_scaled(1, s(-30)).to_decimal(),
            Err(NumericError::PrecisionLoss)
        );
        // trailing zeros bring it back within 28 fractional digits
        assert_eq!(
            Decimal64::from_scaled(100, s(-30)).to_decimal(),
            Ok(Decimal::new(1, 28))
        );
        assert_eq!(
            Decimal64::from_scaled(1, s(29)).to_decimal(),
            Err(NumericError::overflow("Decimal", Operation::Conversion))
        );
    }

    #[test]
    fn test_decimal_round_trip() {
        let x: Decimal64 = "-98765.4321".parse().unwrap();
        let back = Decimal64::from_decimal(x.to_decimal().unwrap()).unwrap();
        assert_eq!(back, x);
        assert_eq!(back.scale(), x.scale());
    }
}
