// ============================================================================
// Fixed-Point Library
// Scale-tracked fixed-point numbers with exact radix shifting
// ============================================================================

//! # Fixed Point
//!
//! A fixed-point number type that stores a signed integer together with a
//! scale exponent, for radix 10 or radix 2.
//!
//! ## Features
//!
//! - **Runtime scale, compile-time radix and width**: `FixedPoint<i32, Base10>`
//!   and friends; mixing radices or widths does not type-check
//! - **Exact shifting** through integer power tables
//! - **Checked and wrapping arithmetic** with explicit overflow predicates
//! - **Precision-preserving division** with configurable rounding
//! - **rust_decimal interop** and decimal string parsing at API boundaries
//!
//! ## Example
//!
//! ```rust
//! use fixed_point::prelude::*;
//!
//! // 125 stored at scale -2: unscaled value 12500
//! let a = Decimal32::from_value_and_scale(125, ScaleExponent::new(-2))?;
//! assert_eq!(a.unscaled_value(), 12_500);
//!
//! // 1.1 written directly as unscaled 11 at scale -1
//! let b = Decimal32::from_scaled(11, ScaleExponent::new(-1));
//!
//! // addition works at the larger scale (-1); multiplication adds scales
//! assert_eq!((a + b).to_string(), "126.1");
//! assert_eq!((a * b).scale(), ScaleExponent::new(-3));
//!
//! // overflow is reported, never silently wrapped
//! let min = Decimal32::from_value_and_scale(i32::MIN, ScaleExponent::ZERO)?;
//! let minus_one = Decimal32::from_value_and_scale(-1, ScaleExponent::ZERO)?;
//! assert!(min.checked_div(minus_one).is_err());
//! # Ok::<(), NumericError>(())
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{ArithmeticConfig, OverflowPolicy, RoundingMode};
    pub use crate::numeric::{
        Base10, Base2, BestRepresentation, Binary16, Binary32, Binary64, Binary8, Decimal16,
        Decimal32, Decimal64, Decimal8, FixedPoint, NumericError, NumericResult, ScaleExponent,
        ScaledInteger,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::{division_overflow, shift, Operation};

    #[test]
    fn test_construct_and_convert_back() {
        let x = Decimal32::from_value_and_scale(125, ScaleExponent::new(-2)).unwrap();
        assert_eq!(x.unscaled_value(), 12_500);
        assert_eq!(x.to::<i32>().unwrap(), 125);
        assert_eq!(x.best_representation(), BestRepresentation::Integer(125));
    }

    #[test]
    fn test_mixed_scale_addition() {
        let coarse = Decimal32::from_scaled(100, ScaleExponent::ZERO);
        let fine = Decimal32::from_scaled(1, ScaleExponent::new(1));

        let sum = coarse + fine;
        assert_eq!(sum.unscaled_value(), 11);
        assert_eq!(sum.scale(), ScaleExponent::new(1));
        assert_eq!(
            shift::<Base10>(sum.unscaled_value() as i128, -sum.scale()),
            Some(110)
        );
    }

    #[test]
    fn test_min_divided_by_minus_one() {
        let min = Decimal32::from_value_and_scale(i32::MIN, ScaleExponent::ZERO).unwrap();
        let minus_one = Decimal32::from_value_and_scale(-1, ScaleExponent::ZERO).unwrap();

        assert!(division_overflow(i32::MIN, -1));
        assert_eq!(
            min.checked_div(minus_one),
            Err(NumericError::Overflow {
                representation: "i32",
                operation: Operation::Division,
            })
        );
        assert_eq!(
            min.checked_div(minus_one).unwrap_err().to_string(),
            "fixed_point overflow of underlying representation type i32 during division"
        );
    }

    #[test]
    fn test_invoice_total() {
        // unit price 19.99, quantity 3, tax rate 8.25%
        let price: Decimal64 = "19.99".parse().unwrap();
        let quantity = Decimal64::from_value_and_scale(3, ScaleExponent::ZERO).unwrap();
        let rate: Decimal64 = "0.0825".parse().unwrap();

        let subtotal = price * quantity;
        assert_eq!(subtotal.to_string(), "59.97");

        let tax = (subtotal * rate)
            .div_to_scale(
                Decimal64::from_value_and_scale(1, ScaleExponent::ZERO).unwrap(),
                ScaleExponent::new(-2),
                RoundingMode::HalfAwayFromZero,
            )
            .unwrap();
        assert_eq!(tax.unscaled_value(), 495);

        let total = subtotal + tax;
        assert_eq!(total.scale(), ScaleExponent::new(-2));
        assert_eq!(total.to_decimal().unwrap().to_string(), "64.92");
    }

    #[test]
    fn test_configured_division() {
        let config = ArithmeticConfig::new()
            .with_rounding(RoundingMode::HalfAwayFromZero)
            .with_division_guard_digits(4);

        let one = Decimal64::from_value_and_scale(1, ScaleExponent::ZERO).unwrap();
        let six = Decimal64::from_value_and_scale(6, ScaleExponent::ZERO).unwrap();

        let q = one.div_with(six, &config).unwrap();
        assert_eq!(q.unscaled_value(), 1_667);
        assert_eq!(q.scale(), ScaleExponent::new(-4));
        assert!(one.checked_div(six).unwrap().is_zero());
    }

    #[test]
    fn test_binary_fractions() {
        // 3 / 8 = 0.375 exactly in radix 2
        let x = Binary32::from_value_and_scale(0.375, ScaleExponent::new(-3)).unwrap();
        assert_eq!(x.unscaled_value(), 3);
        assert_eq!(x.to_string(), "0.375");
        assert_eq!(x.to::<i32>().unwrap(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let x = Decimal32::from_scaled(-12_345, ScaleExponent::new(-2));
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#"{"scale":-2,"value":-12345}"#);

        let back: Decimal32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unscaled_value(), -12_345);
        assert_eq!(back.scale(), ScaleExponent::new(-2));
    }
}
