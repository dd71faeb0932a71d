// ============================================================================
// Fixed-Point Decimal
// Fixed-scale monetary magnitude with HALF_UP rounding on construction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-point decimal number with compile-time scale.
///
/// Internally stores `value × 10^DECIMALS` as an i64. Every constructor that
/// accepts more precision than `DECIMALS` rounds HALF_UP (half away from
/// zero), so the stored magnitude is always the canonical rounding of its
/// input and equality is exact.
///
/// # Type Parameter
/// - `DECIMALS`: Number of fractional digits (0-18). Default is 2.
///
/// # Value Range
/// With DECIMALS=2 (default):
/// - Minimum: -92,233,720,368,547,758.08
/// - Maximum: +92,233,720,368,547,758.07
/// - Precision: 0.01
///
/// # Example
/// ```
/// use typed_money::numeric::FixedDecimal;
///
/// let parsed: FixedDecimal = "31.12345".parse().unwrap();
/// let number = FixedDecimal::<2>::from_number(31.12345).unwrap();
/// assert_eq!(parsed, number);
/// assert_eq!(parsed.to_string(), "31.12");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 2>(i64);

/// Largest supported scale; 10^19 no longer fits an i64.
pub const MAX_DECIMALS: u8 = 18;

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    assert!(n <= MAX_DECIMALS, "FixedDecimal supports at most 18 decimals");
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

// ============================================================================
// Parse Options
// ============================================================================

/// Grammar switches for [`FixedDecimal::parse_with`].
///
/// `FromStr` uses [`ParseOptions::default`], which accepts surrounding
/// whitespace and scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept leading/trailing ASCII whitespace
    pub trim_whitespace: bool,
    /// Accept an `e`/`E` exponent suffix
    pub accept_exponent: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            accept_exponent: true,
        }
    }
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from a float, rounding HALF_UP to `DECIMALS` digits.
    ///
    /// The float is first rendered as its shortest round-trip decimal text and
    /// the rounding is applied to those digits, so `1.005` rounds to `1.01`
    /// rather than to the `1.00` its binary approximation would give.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinity
    /// - `Overflow` if the rounded value is out of range
    pub fn from_number(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        Self::parse_with(&value.to_string(), ParseOptions::default())
    }

    /// Create from a `rust_decimal::Decimal`, rounding HALF_UP.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value is out of range.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let rounded = d.round_dp_with_strategy(D as u32, RoundingStrategy::MidpointAwayFromZero);

        // round_dp leaves scale <= D, so this only ever scales up
        let factor = 10i128
            .checked_pow(D as u32 - rounded.scale())
            .ok_or(NumericError::Overflow)?;
        let raw = rounded
            .mantissa()
            .checked_mul(factor)
            .ok_or(NumericError::Overflow)?;

        i64::try_from(raw)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    /// Parse a decimal numeral with explicit grammar options.
    ///
    /// Accepts `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at
    /// least one mantissa digit. Digits beyond `DECIMALS` are rounded HALF_UP.
    ///
    /// # Errors
    /// - `InvalidInput` if the text is not a decimal numeral
    /// - `Overflow` if the rounded value is out of range
    pub fn parse_with(input: &str, options: ParseOptions) -> NumericResult<Self> {
        let s = if options.trim_whitespace {
            input.trim()
        } else {
            input
        };

        let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(_) if !options.accept_exponent => return Err(NumericError::InvalidInput),
            Some(pos) => (&unsigned[..pos], parse_exponent(&unsigned[pos + 1..])?),
            None => (unsigned, 0),
        };

        let (int_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_str.is_empty() && frac_str.is_empty()) || !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        // Significant digits only; leading zeros carry no magnitude
        let digits: Vec<u8> = int_str
            .bytes()
            .chain(frac_str.bytes())
            .map(|b| b - b'0')
            .skip_while(|&d| d == 0)
            .collect();
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }

        // value = digits × 10^(exponent - frac_len); raw = value × 10^D
        let shift = exponent
            .saturating_sub(frac_str.len() as i64)
            .saturating_add(D as i64);

        let (kept, round_digit) = if shift >= 0 {
            (&digits[..], 0)
        } else {
            let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
            if dropped > digits.len() {
                (&digits[..0], 0)
            } else {
                let keep = digits.len() - dropped;
                if digits[keep..].iter().any(|&d| d != 0) {
                    tracing::trace!(input = s, decimals = D, "rounding excess fractional digits");
                }
                (&digits[..keep], digits[keep])
            }
        };

        let mut magnitude: i128 = 0;
        for &d in kept {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(d as i128))
                .ok_or(NumericError::Overflow)?;
        }
        if shift > 0 {
            let factor = u32::try_from(shift)
                .ok()
                .and_then(|exp| 10i128.checked_pow(exp))
                .ok_or(NumericError::Overflow)?;
            magnitude = magnitude.checked_mul(factor).ok_or(NumericError::Overflow)?;
        }

        // HALF_UP on the magnitude is half-away-from-zero on the signed value
        if round_digit >= 5 {
            magnitude += 1;
        }

        let signed = if negative { -magnitude } else { magnitude };
        i64::try_from(signed)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Convert to rust_decimal::Decimal, keeping all `DECIMALS` digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, D as u32)
    }

    /// Lossy conversion for consumers that need a float.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

/// Parse the digits after `e`/`E`, saturating absurdly large exponents.
fn parse_exponent(s: &str) -> NumericResult<i64> {
    let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidInput);
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as i64)
    });
    Ok(if negative { -value } else { value })
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedDecimal<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedDecimal<D> {}

impl<const D: u8> PartialOrd for FixedDecimal<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const D: u8> Ord for FixedDecimal<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Hash for FixedDecimal<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    /// Always prints exactly `DECIMALS` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // Handle -0.xx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string, rounding HALF_UP.
    ///
    /// # Examples
    /// - "42.1234" -> 42.12
    /// - "-0.005" -> -0.01
    /// - "1.5e2" -> 150.00
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, ParseOptions::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
