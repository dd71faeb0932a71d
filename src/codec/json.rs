// ============================================================================
// JSON Codec
// Number-or-string in, number-only out
// ============================================================================

use super::config::CodecConfig;
use super::error::{CodecError, JsonKind};
use crate::domain::{AmountKind, Nullable, Required, Tagged};
use crate::numeric::{FixedDecimal, NumericError, ParseOptions};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Number, Value};
use std::fmt;

/// An amount type that can be decoded from and encoded to a JSON node.
///
/// Implemented for [`FixedDecimal`] and every [`Tagged`] role. Absence is
/// part of the decode result so the same entry point serves nullable and
/// required slots.
pub trait JsonAmount: Sized + Copy {
    /// Decode one JSON node: number or string gives `Present`, `null` gives
    /// `Absent`, anything else is a `TypeMismatch`.
    fn decode_node(node: &Value, config: &CodecConfig) -> Result<Nullable<Self>, CodecError>;

    /// Encode as a JSON number with the exact fixed-scale text.
    fn encode_node(&self) -> serde_json::Result<Value>;

    /// serde entry point shared by `Nullable<T>` and `Required<T>`.
    fn deserialize_nullable<'de, De>(deserializer: De) -> Result<Nullable<Self>, De::Error>
    where
        De: Deserializer<'de>;
}

fn decode_decimal<const D: u8>(
    node: &Value,
    config: &CodecConfig,
) -> Result<Nullable<FixedDecimal<D>>, CodecError> {
    match node {
        Value::Null => Ok(Nullable::Absent),
        // Number keeps the literal text it was parsed from
        Value::Number(number) => decode_literal(&number.to_string()).map_err(CodecError::Numeric),
        Value::String(text) => decode_text(text, config),
        other => Err(CodecError::TypeMismatch {
            found: JsonKind::of(other),
        }),
    }
}

/// A JSON number literal, rounded from its full decimal text.
fn decode_literal<const D: u8>(literal: &str) -> Result<Nullable<FixedDecimal<D>>, NumericError> {
    FixedDecimal::parse_with(literal, ParseOptions::default()).map(Nullable::Present)
}

fn decode_text<const D: u8>(
    text: &str,
    config: &CodecConfig,
) -> Result<Nullable<FixedDecimal<D>>, CodecError> {
    if config.is_null_text(text) {
        return Ok(Nullable::Absent);
    }
    FixedDecimal::parse_with(text, config.parse_options())
        .map(Nullable::Present)
        .map_err(|err| CodecError::from_text(text, err))
}

// ============================================================================
// Output
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// JSON number for `serde_json::Value` consumers, e.g. `31.10`.
    ///
    /// The number holds the `Display` text verbatim, so it serializes with
    /// exactly `D` fractional digits.
    pub fn to_json_number(self) -> serde_json::Result<Number> {
        self.to_string().parse()
    }

    /// JSON number literal with exactly `D` fractional digits, e.g. `31.10`.
    pub fn to_json_literal(self) -> serde_json::Result<Box<RawValue>> {
        RawValue::from_string(self.to_string())
    }
}

impl<K: AmountKind, const D: u8> Tagged<K, D> {
    /// See [`FixedDecimal::to_json_number`].
    pub fn to_json_number(self) -> serde_json::Result<Number> {
        self.amount().to_json_number()
    }

    pub fn to_json_literal(self) -> serde_json::Result<Box<RawValue>> {
        self.amount().to_json_literal()
    }
}

// ============================================================================
// serde Visitor
// ============================================================================

/// Map key serde_json uses for a number kept as text
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

struct AmountVisitor<const D: u8>;

impl<'de, const D: u8> Visitor<'de> for AmountVisitor<D> {
    type Value = Nullable<FixedDecimal<D>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number, a decimal string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        FixedDecimal::from_integer(v)
            .map(Nullable::Present)
            .map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let v = i64::try_from(v).map_err(|_| E::custom(NumericError::Overflow))?;
        self.visit_i64(v)
    }

    // Formats without literal numbers
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        FixedDecimal::from_number(v)
            .map(Nullable::Present)
            .map_err(E::custom)
    }

    /// serde_json hands fractional and out-of-range numbers over as a
    /// one-entry map holding the literal text.
    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        match map.next_key::<String>()? {
            Some(key) if key == NUMBER_TOKEN => {
                let literal: String = map.next_value()?;
                decode_literal(&literal).map_err(<A::Error as de::Error>::custom)
            },
            _ => Err(de::Error::invalid_type(Unexpected::Map, &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        decode_text(v, &CodecConfig::default()).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Nullable::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Nullable::Absent)
    }

    fn visit_some<De: Deserializer<'de>>(self, deserializer: De) -> Result<Self::Value, De::Error> {
        deserializer.deserialize_any(self)
    }
}

// ============================================================================
// JsonAmount Implementations
// ============================================================================

impl<const D: u8> JsonAmount for FixedDecimal<D> {
    fn decode_node(node: &Value, config: &CodecConfig) -> Result<Nullable<Self>, CodecError> {
        decode_decimal(node, config)
    }

    fn encode_node(&self) -> serde_json::Result<Value> {
        self.to_json_number().map(Value::Number)
    }

    fn deserialize_nullable<'de, De>(deserializer: De) -> Result<Nullable<Self>, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer.deserialize_option(AmountVisitor::<D>)
    }
}

impl<K: AmountKind, const D: u8> JsonAmount for Tagged<K, D> {
    fn decode_node(node: &Value, config: &CodecConfig) -> Result<Nullable<Self>, CodecError> {
        decode_decimal(node, config).map(|decoded| decoded.map(Tagged::new))
    }

    fn encode_node(&self) -> serde_json::Result<Value> {
        self.to_json_number().map(Value::Number)
    }

    fn deserialize_nullable<'de, De>(deserializer: De) -> Result<Nullable<Self>, De::Error>
    where
        De: Deserializer<'de>,
    {
        FixedDecimal::<D>::deserialize_nullable(deserializer).map(|decoded| decoded.map(Tagged::new))
    }
}

// ============================================================================
// serde Implementations
// ============================================================================

impl<const D: u8> Serialize for FixedDecimal<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let literal = self
            .to_json_literal()
            .map_err(<S::Error as ser::Error>::custom)?;
        literal.serialize(serializer)
    }
}

impl<'de, const D: u8> Deserialize<'de> for FixedDecimal<D> {
    /// A bare amount has nowhere to record absence, so `null` is rejected;
    /// declare the field `Required<T>` or `Nullable<T>` to accept it.
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        match deserializer.deserialize_any(AmountVisitor::<D>)? {
            Nullable::Present(value) => Ok(value),
            Nullable::Absent => Err(de::Error::invalid_type(
                Unexpected::Other("null"),
                &"a decimal number or string",
            )),
        }
    }
}

impl<K: AmountKind, const D: u8> Serialize for Tagged<K, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.amount().serialize(serializer)
    }
}

impl<'de, K: AmountKind, const D: u8> Deserialize<'de> for Tagged<K, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        FixedDecimal::deserialize(deserializer).map(Tagged::new)
    }
}

impl<T: JsonAmount + Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Present(value) => value.serialize(serializer),
            Nullable::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: JsonAmount> Deserialize<'de> for Nullable<T> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        T::deserialize_nullable(deserializer)
    }
}

impl<T: JsonAmount + Serialize> Serialize for Required<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_nullable().serialize(serializer)
    }
}

impl<'de, T: JsonAmount> Deserialize<'de> for Required<T> {
    /// Null or a missing key yields a missing slot, never an error.
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        T::deserialize_nullable(deserializer).map(Required::from)
    }
}

// ============================================================================
// Node-level Codec
// ============================================================================

/// Node-level codec carrying an explicit [`CodecConfig`].
///
/// serde impls always use the default configuration; go through this type
/// when the boundary needs a different input grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode a node into a nullable slot.
    pub fn decode_nullable<T: JsonAmount>(&self, node: &Value) -> Result<Nullable<T>, CodecError> {
        T::decode_node(node, &self.config)
            .inspect_err(|err| tracing::debug!(error = %err, "amount decode failed"))
    }

    /// Decode a node into a required slot; `null` yields a missing slot.
    pub fn decode_required<T: JsonAmount>(&self, node: &Value) -> Result<Required<T>, CodecError> {
        self.decode_nullable(node).map(Required::from)
    }

    pub fn encode<T: JsonAmount>(&self, value: &T) -> serde_json::Result<Value> {
        value.encode_node()
    }

    /// `Absent` encodes to `null`.
    pub fn encode_nullable<T: JsonAmount>(&self, value: &Nullable<T>) -> serde_json::Result<Value> {
        match value {
            Nullable::Present(value) => value.encode_node(),
            Nullable::Absent => Ok(Value::Null),
        }
    }
}
