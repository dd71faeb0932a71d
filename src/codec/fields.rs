// ============================================================================
// Field Decoder
// Decode several amount fields of one JSON object, collecting every failure
// ============================================================================

use super::config::CodecConfig;
use super::error::{CodecError, JsonKind};
use super::json::JsonAmount;
use crate::domain::{Nullable, Required};
use crate::validation::Violations;
use serde_json::{Map, Value};

/// Outcome of decoding one field.
///
/// A field starts unparsed and [`FieldDecoder::state`] moves it to exactly
/// one of these. `Absent` is a successful outcome; whether it is acceptable
/// is decided by the validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState<T> {
    Present(T),
    Absent,
    Failed(CodecError),
}

impl<T> FieldState<T> {
    pub fn from_decode(result: Result<Nullable<T>, CodecError>) -> Self {
        match result {
            Ok(Nullable::Present(value)) => FieldState::Present(value),
            Ok(Nullable::Absent) => FieldState::Absent,
            Err(err) => FieldState::Failed(err),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FieldState::Failed(_))
    }
}

/// Boundary helper that decodes fields out of a JSON object.
///
/// Unlike serde, a malformed field does not abort the whole object: each
/// failure is recorded as a field-scoped violation and the slot is left
/// absent, so one pass reports everything wrong with a request.
#[derive(Debug)]
pub struct FieldDecoder<'a> {
    object: &'a Map<String, Value>,
    config: CodecConfig,
    violations: Violations,
}

impl<'a> FieldDecoder<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            config: CodecConfig::default(),
            violations: Violations::new(),
        }
    }

    /// Decoder over a node that must be a JSON object.
    pub fn from_value(node: &'a Value) -> Result<Self, CodecError> {
        node.as_object()
            .map(Self::new)
            .ok_or(CodecError::TypeMismatch {
                found: JsonKind::of(node),
            })
    }

    /// Builder method: Set the codec configuration
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Decode `field` without recording anything. A missing key is `Absent`.
    pub fn state<T: JsonAmount>(&self, field: &str) -> FieldState<T> {
        match self.object.get(field) {
            Some(node) => FieldState::from_decode(T::decode_node(node, &self.config)),
            None => FieldState::Absent,
        }
    }

    /// Decode a nullable field; failures are recorded and yield `Absent`.
    pub fn nullable<T: JsonAmount>(&mut self, field: &str) -> Nullable<T> {
        match self.state(field) {
            FieldState::Present(value) => Nullable::Present(value),
            FieldState::Failed(err) => {
                self.violations.decode_failed(field, err);
                Nullable::Absent
            },
            FieldState::Absent => Nullable::Absent,
        }
    }

    /// Decode a required field. Absence is not recorded here; run the
    /// validation pass on the finished body for that.
    pub fn required<T: JsonAmount>(&mut self, field: &str) -> Required<T> {
        Required::from(self.nullable(field))
    }

    /// Raw access for non-amount fields.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field)
    }

    /// Decode failures recorded so far.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Hand the decode failures to the validation pass.
    pub fn finish(self) -> Violations {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gross, Net};
    use crate::validation::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_field_states() {
        let node = json!({
            "net": 1.239,
            "gross": null,
            "broken": "1,00",
            "flag": false
        });
        let decoder = FieldDecoder::from_value(&node).unwrap();

        assert_eq!(decoder.state::<Net>("net"), FieldState::Present("1.24".parse().unwrap()));
        assert_eq!(decoder.state::<Gross>("gross"), FieldState::Absent);
        assert_eq!(decoder.state::<Gross>("missing"), FieldState::Absent);
        assert!(decoder.state::<Net>("broken").is_failed());
        assert_eq!(
            decoder.state::<Net>("flag"),
            FieldState::Failed(CodecError::TypeMismatch {
                found: JsonKind::Bool
            })
        );
    }

    #[test]
    fn test_every_decode_outcome_has_a_state() {
        let net = Net::from_integer(3).unwrap();
        let failure = CodecError::TypeMismatch {
            found: JsonKind::Array,
        };

        assert_eq!(FieldState::from_decode(Ok(Nullable::Present(net))), FieldState::Present(net));
        assert_eq!(FieldState::<Net>::from_decode(Ok(Nullable::Absent)), FieldState::Absent);

        let failed = FieldState::<Net>::from_decode(Err(failure.clone()));
        assert!(failed.is_failed());
        assert_eq!(failed, FieldState::Failed(failure));
    }

    #[test]
    fn test_collects_all_failures() {
        let node = json!({"a": "x", "b": [], "c": "2.50"});
        let mut decoder = FieldDecoder::from_value(&node).unwrap();

        let a: Required<Net> = decoder.required("a");
        let b: Nullable<Gross> = decoder.nullable("b");
        let c: Required<Gross> = decoder.required("c");

        assert!(!a.is_present());
        assert!(b.is_absent());
        assert!(c.is_present());

        let violations = decoder.finish();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations.kind_of("a"), Some(ViolationKind::ParseError));
        assert_eq!(violations.kind_of("b"), Some(ViolationKind::TypeMismatch));
    }

    #[test]
    fn test_non_object_is_type_mismatch() {
        let node = json!([1, 2]);
        assert_eq!(
            FieldDecoder::from_value(&node).unwrap_err(),
            CodecError::TypeMismatch {
                found: JsonKind::Array
            }
        );
    }

    #[test]
    fn test_config_applies() {
        let node = json!({"net": "null"});
        let mut decoder = FieldDecoder::from_value(&node)
            .unwrap()
            .with_config(CodecConfig::strict());

        let net: Nullable<Net> = decoder.nullable("net");
        assert!(net.is_absent());
        assert_eq!(decoder.violations().kind_of("net"), Some(ViolationKind::ParseError));
    }
}
