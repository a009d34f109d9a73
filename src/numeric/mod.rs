// ============================================================================
// Numeric Module
// Fixed-point values with a runtime scale and a compile-time radix
// ============================================================================
//
// This module provides:
// - FixedPoint<Rep, Rad>: unscaled integer plus scale exponent
// - ScaleExponent: strongly-typed scale, never mixed up with plain integers
// - Radix (Base2, Base10) and Representation (i8..i64) type parameters
// - Overflow predicates for the four basic operations
// - NumericError: Error types for arithmetic and conversion
// - Decimal*/Binary* type aliases for common widths
//
// Design principles:
// - Shifting is exact integer arithmetic against radix power tables
// - Checked entry points return Result; unchecked ones wrap
// - Operands of one operation share radix and width at the type level

mod decimal;
mod errors;
mod fixed_point;
mod native;
mod overflow;
mod radix;
mod representation;
mod scale;
mod shift;

pub use errors::{NumericError, NumericResult, Operation};
pub use fixed_point::{
    BestRepresentation, Binary16, Binary32, Binary64, Binary8, Decimal16, Decimal32, Decimal64,
    Decimal8, FixedPoint, ScaledInteger,
};
pub use native::Native;
pub use overflow::{
    addition_overflow, division_overflow, multiplication_overflow, subtraction_overflow,
};
pub use radix::{Base10, Base2, Radix, RadixKind};
pub use representation::Representation;
pub use scale::ScaleExponent;
pub use shift::{shift, shift_float};
