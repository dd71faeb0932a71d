// ============================================================================
// Codec Module
// JSON boundary for monetary amounts
// ============================================================================
//
// Wire contract per field:
// - In:  JSON number, JSON string, or null (nullable/required slots)
// - Out: JSON number with the type's full scale, or null when absent
//
// The codec never emits a string, whatever shape the input had.

mod config;
mod error;
mod fields;
mod json;

pub use config::CodecConfig;
pub use error::{CodecError, JsonKind};
pub use fields::{FieldDecoder, FieldState};
pub use json::{JsonAmount, JsonCodec};
