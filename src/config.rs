// ============================================================================
// Arithmetic Configuration
// Call-site policy for overflow checking, rounding and division precision
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Policy
// ============================================================================

/// Whether an arithmetic entry point checks the underlying representation
/// for overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Fail with `NumericError::Overflow` instead of producing a wrong value
    #[default]
    Checked,

    /// Unchecked mode: two's complement wraparound of the representation.
    /// A result that overflowed is silently wrong; only use this when the
    /// operands are known to be in range.
    Unchecked,
}

// ============================================================================
// Rounding Mode
// ============================================================================

/// How precision-preserving division disposes of the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Drop the remainder (same as primitive integer division)
    #[default]
    TruncateTowardZero,

    /// Round to nearest, ties away from zero
    HalfAwayFromZero,
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Policy bundle for the `*_with` arithmetic entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Overflow checking for every operation
    pub overflow: OverflowPolicy,

    /// Rounding used by division
    pub rounding: RoundingMode,

    /// Extra radix digits kept by division beyond `lhs.scale - rhs.scale`.
    /// Zero reproduces plain truncating division.
    pub division_guard_digits: u32,
}

impl ArithmeticConfig {
    /// Checked, truncating, no guard digits
    pub const fn new() -> Self {
        Self {
            overflow: OverflowPolicy::Checked,
            rounding: RoundingMode::TruncateTowardZero,
            division_guard_digits: 0,
        }
    }

    /// Shorthand for an unchecked configuration
    pub const fn unchecked() -> Self {
        Self::new().with_overflow(OverflowPolicy::Unchecked)
    }

    /// Builder method: Set overflow policy
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Builder method: Set division rounding
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Set number of guard digits kept by division
    pub const fn with_division_guard_digits(mut self, digits: u32) -> Self {
        self.division_guard_digits = digits;
        self
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArithmeticConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.rounding, RoundingMode::TruncateTowardZero);
        assert_eq!(config.division_guard_digits, 0);
        assert_eq!(config, ArithmeticConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = ArithmeticConfig::new()
            .with_rounding(RoundingMode::HalfAwayFromZero)
            .with_division_guard_digits(4);

        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.division_guard_digits, 4);

        assert_eq!(
            ArithmeticConfig::unchecked().overflow,
            OverflowPolicy::Unchecked
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = ArithmeticConfig::new()
            .with_overflow(OverflowPolicy::Unchecked)
            .with_division_guard_digits(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: ArithmeticConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
