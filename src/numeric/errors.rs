// ============================================================================
// Numeric Errors
// Error types for constructing fixed-scale monetary values
// ============================================================================

use std::fmt;

/// Errors that can occur while building a [`FixedDecimal`](super::FixedDecimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a valid decimal numeral
    InvalidInput,
    /// Rounded magnitude does not fit the scaled i64
    Overflow,
    /// Float input was NaN or infinite
    NotFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: not a decimal numeral"),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the representable range")
            },
            NumericError::NotFinite => write!(f, "not finite: NaN or infinity"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
