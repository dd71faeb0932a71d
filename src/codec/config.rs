// ============================================================================
// Codec Configuration
// Input grammar switches for the JSON amount codec
// ============================================================================

use crate::numeric::ParseOptions;
use serde::{Deserialize, Serialize};

/// Configuration for decoding amounts from JSON.
///
/// Output is not configurable: amounts always encode as a JSON number with
/// the type's full scale, and absent values as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Treat the string `"null"` exactly like JSON `null`
    pub null_string_is_null: bool,

    /// Accept leading/trailing whitespace inside string amounts
    pub trim_whitespace: bool,

    /// Accept scientific notation (`"1.5e2"`) inside string amounts
    pub accept_exponent: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl CodecConfig {
    /// Create the default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set whether `"null"` strings count as null
    pub fn with_null_string_is_null(mut self, enabled: bool) -> Self {
        self.null_string_is_null = enabled;
        self
    }

    /// Builder method: Set whitespace trimming for string amounts
    pub fn with_trim_whitespace(mut self, enabled: bool) -> Self {
        self.trim_whitespace = enabled;
        self
    }

    /// Builder method: Set exponent acceptance for string amounts
    pub fn with_accept_exponent(mut self, enabled: bool) -> Self {
        self.accept_exponent = enabled;
        self
    }

    /// Grammar used for string amounts
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            trim_whitespace: self.trim_whitespace,
            accept_exponent: self.accept_exponent,
        }
    }

    /// Whether a string node should decode as absent
    pub(crate) fn is_null_text(&self, text: &str) -> bool {
        if !self.null_string_is_null {
            return false;
        }
        let text = if self.trim_whitespace { text.trim() } else { text };
        text == "null"
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CodecConfig {
    /// Accept everything a typical web client sends
    /// - `"null"` string is null
    /// - Whitespace and exponents allowed
    pub fn lenient() -> Self {
        Self {
            null_string_is_null: true,
            trim_whitespace: true,
            accept_exponent: true,
        }
    }

    /// Plain decimal numerals only
    /// - `"null"` string is a parse error
    /// - No whitespace, no exponent
    pub fn strict() -> Self {
        Self {
            null_string_is_null: false,
            trim_whitespace: false,
            accept_exponent: false,
        }
    }
}
