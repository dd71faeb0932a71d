// ============================================================================
// Numeric Module
// Fixed-scale canonical decimal for monetary magnitudes
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time scale (default 2)
// - ParseOptions: Grammar switches for decimal text input
// - NumericError: Error types for construction and parsing
//
// Design principles:
// - No floating-point storage; floats are accepted only as input
// - Every constructor rounds HALF_UP to the declared scale
// - All construction returns Result (no panics)
// - Equality, ordering and hashing on the scaled i64

mod errors;
mod fixed_decimal;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, ParseOptions, MAX_DECIMALS};
