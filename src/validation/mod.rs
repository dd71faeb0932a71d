// ============================================================================
// Validation Module
// Explicit post-decode pass reporting field-scoped violations
// ============================================================================
//
// Decoding never fails because a value is missing. Required slots record the
// absence, and the boundary layer runs a validation pass afterwards that
// walks its declared-required fields and collects every violation.

use crate::codec::CodecError;
use crate::domain::Required;
use std::fmt;

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Non-nullable field was null or not supplied
    RequiredValueMissing,
    /// String was not a decimal numeral, or the value was out of range
    ParseError,
    /// Node kind cannot hold an amount
    TypeMismatch,
}

impl ViolationKind {
    pub fn of(err: &CodecError) -> Self {
        match err {
            CodecError::TypeMismatch { .. } => ViolationKind::TypeMismatch,
            CodecError::Parse { .. } | CodecError::Numeric(_) => ViolationKind::ParseError,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::RequiredValueMissing => write!(f, "required value missing"),
            ViolationKind::ParseError => write!(f, "parse error"),
            ViolationKind::TypeMismatch => write!(f, "type mismatch"),
        }
    }
}

/// A single field-scoped violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    /// Decode error behind a `ParseError`/`TypeMismatch`
    pub error: Option<CodecError>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{}: {} ({})", self.field, self.kind, err),
            None => write!(f, "{}: {}", self.field, self.kind),
        }
    }
}

/// Something whose presence a validation pass can check.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Required<T> {
    fn is_present(&self) -> bool {
        Required::is_present(self)
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

/// Ordered collection of violations from one decode/validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a codec failure for `field`.
    pub fn decode_failed(&mut self, field: &str, err: CodecError) {
        tracing::debug!(field, error = %err, "field failed to decode");
        self.0.push(Violation {
            field: field.to_owned(),
            kind: ViolationKind::of(&err),
            error: Some(err),
        });
    }

    /// Flag `field` as `RequiredValueMissing` unless it is present.
    ///
    /// A field that already failed to decode is not flagged again.
    pub fn require(&mut self, field: &str, slot: &impl Presence) {
        if slot.is_present() || self.contains(field) {
            return;
        }
        tracing::debug!(field, "required value missing");
        self.0.push(Violation {
            field: field.to_owned(),
            kind: ViolationKind::RequiredValueMissing,
            error: None,
        });
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// Kind reported for `field`, if any.
    pub fn kind_of(&self, field: &str) -> Option<ViolationKind> {
        self.0.iter().find(|v| v.field == field).map(|v| v.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }

    /// `Ok` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// A decoded body whose required fields can be checked.
///
/// Implement `validate` by calling [`Violations::require`] for each
/// non-nullable field.
pub trait Validate {
    fn validate(&self, violations: &mut Violations);

    /// Run the pass on its own.
    fn check(&self) -> Result<(), Violations> {
        let mut violations = Violations::new();
        self.validate(&mut violations);
        violations.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonKind;
    use crate::domain::{Gross, Net};

    struct Invoice {
        net: Required<Net>,
        gross: Required<Gross>,
        reference: Option<String>,
    }

    impl Validate for Invoice {
        fn validate(&self, violations: &mut Violations) {
            violations.require("net", &self.net);
            violations.require("gross", &self.gross);
            violations.require("reference", &self.reference);
        }
    }

    #[test]
    fn test_all_present_passes() {
        let invoice = Invoice {
            net: Required::new(Net::ZERO),
            gross: Required::new(Gross::ZERO),
            reference: Some("INV-1".to_string()),
        };
        assert_eq!(invoice.check(), Ok(()));
    }

    #[test]
    fn test_reports_every_missing_field() {
        let invoice = Invoice {
            net: Required::missing(),
            gross: Required::new(Gross::ZERO),
            reference: None,
        };

        let violations = invoice.check().unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations.kind_of("net"), Some(ViolationKind::RequiredValueMissing));
        assert_eq!(violations.kind_of("reference"), Some(ViolationKind::RequiredValueMissing));
        assert_eq!(violations.kind_of("gross"), None);
        assert_eq!(
            violations.to_string(),
            "net: required value missing; reference: required value missing"
        );
    }

    #[test]
    fn test_decode_failure_is_not_reported_twice() {
        let mut violations = Violations::new();
        violations.decode_failed(
            "net",
            CodecError::TypeMismatch {
                found: JsonKind::Bool,
            },
        );
        violations.require("net", &Required::<Net>::missing());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations.kind_of("net"), Some(ViolationKind::TypeMismatch));
    }

    #[test]
    fn test_kind_of_codec_error() {
        let parse = CodecError::Parse {
            input: "x".to_string(),
        };
        assert_eq!(ViolationKind::of(&parse), ViolationKind::ParseError);
        assert_eq!(
            ViolationKind::of(&CodecError::Numeric(crate::numeric::NumericError::Overflow)),
            ViolationKind::ParseError
        );
    }

    #[test]
    fn test_violation_display_includes_error() {
        let mut violations = Violations::new();
        violations.decode_failed(
            "gross",
            CodecError::Parse {
                input: "abc".to_string(),
            },
        );
        let rendered: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["gross: parse error (invalid decimal string \"abc\")"]);
    }
}
