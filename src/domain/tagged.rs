// ============================================================================
// Typed Amounts
// Nominal net/gross wrappers around the canonical decimal
// ============================================================================

use crate::numeric::{FixedDecimal, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::NetKind {}
    impl Sealed for super::GrossKind {}
}

/// Semantic role of a monetary amount.
///
/// Sealed: the only roles are [`NetKind`] and [`GrossKind`].
pub trait AmountKind:
    sealed::Sealed + Copy + Eq + Ord + std::hash::Hash + Send + Sync + 'static
{
    /// Human-readable role name
    const LABEL: &'static str;
    /// Whether the amount includes tax or markup
    const IS_GROSS: bool;
}

/// Amount excluding tax or markup. Uninhabited; used only as a type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetKind {}

/// Amount including tax or markup. Uninhabited; used only as a type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrossKind {}

impl AmountKind for NetKind {
    const LABEL: &'static str = "Net";
    const IS_GROSS: bool = false;
}

impl AmountKind for GrossKind {
    const LABEL: &'static str = "Gross";
    const IS_GROSS: bool = true;
}

/// A canonical decimal tagged with its monetary role.
///
/// `Tagged<NetKind>` and `Tagged<GrossKind>` are distinct types with no
/// conversion between them. Moving between net and gross needs an explicit
/// tax or markup rule, which this crate leaves to the caller.
///
/// ```compile_fail
/// use typed_money::{Gross, Net};
///
/// fn book_revenue(_amount: Gross) {}
///
/// let net: Net = "10.00".parse().unwrap();
/// book_revenue(net);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tagged<K: AmountKind, const D: u8 = 2> {
    amount: FixedDecimal<D>,
    kind: PhantomData<K>,
}

/// Net amount at the default scale of 2
pub type Net = Tagged<NetKind>;

/// Gross amount at the default scale of 2
pub type Gross = Tagged<GrossKind>;

impl<K: AmountKind, const D: u8> Tagged<K, D> {
    /// Zero in this role
    pub const ZERO: Self = Self::new(FixedDecimal::ZERO);

    /// Tag an already canonical decimal.
    #[inline]
    pub const fn new(amount: FixedDecimal<D>) -> Self {
        Self {
            amount,
            kind: PhantomData,
        }
    }

    /// Round a float HALF_UP and tag it.
    pub fn from_number(value: f64) -> NumericResult<Self> {
        FixedDecimal::from_number(value).map(Self::new)
    }

    /// Tag a whole number of units.
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        FixedDecimal::from_integer(value).map(Self::new)
    }

    /// Round a `rust_decimal::Decimal` HALF_UP and tag it.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        FixedDecimal::from_decimal(value).map(Self::new)
    }

    /// The untagged canonical magnitude.
    #[inline]
    pub fn amount(self) -> FixedDecimal<D> {
        self.amount
    }

    /// Convert to `rust_decimal::Decimal` (exact).
    pub fn to_decimal(self) -> Decimal {
        self.amount.to_decimal()
    }

    /// Whether this role includes tax or markup.
    #[inline]
    pub fn is_gross(self) -> bool {
        K::IS_GROSS
    }

    /// Role name, `"Net"` or `"Gross"`.
    #[inline]
    pub fn label(self) -> &'static str {
        K::LABEL
    }
}

impl<K: AmountKind, const D: u8> Default for Tagged<K, D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<K: AmountKind, const D: u8> FromStr for Tagged<K, D> {
    type Err = crate::numeric::NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<K: AmountKind, const D: u8> fmt::Debug for Tagged<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::LABEL, self.amount)
    }
}

impl<K: AmountKind, const D: u8> fmt::Display for Tagged<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_constants() {
        let net = Net::ZERO;
        let gross = Gross::ZERO;
        assert!(!net.is_gross());
        assert!(gross.is_gross());
        assert_eq!(net.label(), "Net");
        assert_eq!(gross.label(), "Gross");
    }

    #[test]
    fn test_construction_rounds() {
        let net = Net::from_number(31.12345).unwrap();
        assert_eq!(net.amount().raw_value(), 3112);

        let gross: Gross = "42.1234".parse().unwrap();
        assert_eq!(gross.to_string(), "42.12");

        let from_decimal = Gross::from_decimal(Decimal::new(421234, 4)).unwrap();
        assert_eq!(from_decimal, gross);
    }

    #[test]
    fn test_equal_magnitudes_stay_distinct_types() {
        let net = Net::from_integer(10).unwrap();
        let gross = Gross::from_integer(10).unwrap();

        // Only the untagged magnitudes are comparable
        assert_eq!(net.amount(), gross.amount());
    }

    #[test]
    fn test_debug_includes_role() {
        let net: Net = "1.5".parse().unwrap();
        assert_eq!(format!("{:?}", net), "Net(1.50)");

        let gross: Tagged<GrossKind, 4> = "1.5".parse().unwrap();
        assert_eq!(format!("{:?}", gross), "Gross(1.5000)");
    }

    #[test]
    fn test_ordering() {
        let small: Net = "9.99".parse().unwrap();
        let large: Net = "10".parse().unwrap();
        assert!(small < large);
        assert_eq!(Net::default(), Net::ZERO);
    }
}
