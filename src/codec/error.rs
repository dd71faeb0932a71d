// ============================================================================
// Codec Errors
// Failures raised while decoding a JSON node into an amount
// ============================================================================

use crate::numeric::NumericError;
use serde_json::Value;
use std::fmt;

/// Kind of JSON node, used to report type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(node: &Value) -> Self {
        match node {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Errors raised by the JSON codec.
///
/// A missing value is not an error here; it decodes to `Absent` and is
/// reported later by the validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// String node is not a decimal numeral
    Parse { input: String },
    /// Node kind cannot hold an amount (object, array, boolean)
    TypeMismatch { found: JsonKind },
    /// Numeral was well-formed but not representable
    Numeric(NumericError),
}

impl CodecError {
    pub(crate) fn from_text(input: &str, err: NumericError) -> Self {
        match err {
            NumericError::InvalidInput => CodecError::Parse {
                input: input.to_owned(),
            },
            other => CodecError::Numeric(other),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Parse { input } => write!(f, "invalid decimal string {:?}", input),
            CodecError::TypeMismatch { found } => {
                write!(f, "expected a number, a string or null, found {}", found)
            },
            CodecError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CodecError {
    fn from(err: NumericError) -> Self {
        CodecError::Numeric(err)
    }
}
