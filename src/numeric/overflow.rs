// ============================================================================
// Overflow Predicates
// Decide, before combining two operands, whether the result leaves the range
// of the representation
// ============================================================================

use super::representation::Representation;

/// `lhs + rhs` would not fit `R`.
#[inline]
pub fn addition_overflow<R: Representation>(lhs: R, rhs: R) -> bool {
    if rhs > R::ZERO {
        lhs > R::MAX - rhs
    } else {
        lhs < R::MIN - rhs
    }
}

/// `lhs - rhs` would not fit `R`.
#[inline]
pub fn subtraction_overflow<R: Representation>(lhs: R, rhs: R) -> bool {
    if rhs > R::ZERO {
        lhs < R::MIN + rhs
    } else {
        lhs > R::MAX + rhs
    }
}

/// `lhs * rhs` would not fit `R`.
#[inline]
pub fn multiplication_overflow<R: Representation>(lhs: R, rhs: R) -> bool {
    if rhs > R::ZERO {
        lhs > R::MAX / rhs || lhs < R::MIN / rhs
    } else if rhs < R::NEG_ONE {
        lhs > R::MIN / rhs || lhs < R::MAX / rhs
    } else {
        rhs == R::NEG_ONE && lhs == R::MIN
    }
}

/// `lhs / rhs` would not fit `R`. Only `MIN / -1` does; a zero divisor is
/// not an overflow and is reported separately.
#[inline]
pub fn division_overflow<R: Representation>(lhs: R, rhs: R) -> bool {
    lhs == R::MIN && rhs == R::NEG_ONE
}
