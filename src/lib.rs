// ============================================================================
// Typed Money Library
// Net/gross monetary value objects with a number-or-string JSON codec
// ============================================================================

//! # Typed Money
//!
//! Monetary value objects that cannot be mixed up and round-trip cleanly
//! through JSON.
//!
//! ## Features
//!
//! - **Nominal roles**: `Net` and `Gross` are distinct types with no implicit conversion
//! - **Canonical decimal**: scaled-i64 storage, HALF_UP rounding to 2 digits on input
//! - **Lenient input, strict output**: accepts JSON numbers or strings, always emits numbers
//! - **Explicit optionality**: `Nullable<T>` for optional fields, `Required<T>` plus a
//!   validation pass for mandatory ones
//!
//! ## Example
//!
//! ```rust
//! use typed_money::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize, Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Line {
//!     net_with_rounding: Required<Net>,
//!     gross_with_string: Required<Gross>,
//!     nullable_value: NetNullable,
//! }
//!
//! impl Validate for Line {
//!     fn validate(&self, violations: &mut Violations) {
//!         violations.require("netWithRounding", &self.net_with_rounding);
//!         violations.require("grossWithString", &self.gross_with_string);
//!     }
//! }
//!
//! let line: Line = serde_json::from_str(
//!     r#"{"netWithRounding": 31.12345, "grossWithString": "42.1234", "nullableValue": null}"#,
//! ).unwrap();
//! assert!(line.check().is_ok());
//!
//! let json = serde_json::to_string(&line).unwrap();
//! assert_eq!(json, r#"{"netWithRounding":31.12,"grossWithString":42.12,"nullableValue":null}"#);
//! ```

pub mod codec;
pub mod domain;
pub mod numeric;
pub mod validation;

pub use domain::{Gross, GrossNullable, Net, NetNullable, Nullable, Required, Tagged};
pub use numeric::FixedDecimal;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        CodecConfig, CodecError, FieldDecoder, FieldState, JsonAmount, JsonCodec, JsonKind,
    };
    pub use crate::domain::{
        AmountKind, Gross, GrossKind, GrossNullable, Net, NetKind, NetNullable, Nullable,
        Required, Tagged,
    };
    pub use crate::numeric::{FixedDecimal, NumericError, NumericResult};
    pub use crate::validation::{Presence, Validate, Violation, ViolationKind, Violations};
}
