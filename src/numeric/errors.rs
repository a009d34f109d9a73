// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Negation,
    /// Moving a value between scales (construction, rescaling)
    Shift,
    /// Conversion into a native or external numeric type
    Conversion,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
            Operation::Division => write!(f, "division"),
            Operation::Negation => write!(f, "negation"),
            Operation::Shift => write!(f, "shift"),
            Operation::Conversion => write!(f, "conversion"),
        }
    }
}

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the underlying representation
    Overflow {
        /// Name of the integer type that overflowed (e.g. `"i32"`)
        representation: &'static str,
        operation: Operation,
    },
    /// Attempted division by zero
    DivisionByZero,
    /// The scale exponent itself left the `i32` range
    ScaleOutOfRange,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
}

impl NumericError {
    pub(crate) const fn overflow(representation: &'static str, operation: Operation) -> Self {
        NumericError::Overflow {
            representation,
            operation,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow {
                representation,
                operation,
            } => write!(
                f,
                "fixed_point overflow of underlying representation type {} during {}",
                representation, operation
            ),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ScaleOutOfRange => {
                write!(f, "scale exponent out of range for i32")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::overflow("i32", Operation::Addition).to_string(),
            "fixed_point overflow of underlying representation type i32 during addition"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        let add = NumericError::overflow("i64", Operation::Addition);
        assert_eq!(add, NumericError::overflow("i64", Operation::Addition));
        assert_ne!(add, NumericError::overflow("i8", Operation::Addition));
        assert_ne!(add, NumericError::overflow("i64", Operation::Division));
    }
}
