// ============================================================================
// Optional Amounts
// Nullable (absence allowed) and Required (absence is a violation) slots
// ============================================================================

use super::tagged::{Gross, Net};

/// An amount that may legitimately be absent.
///
/// `Absent` is distinct from `Present` holding zero: JSON `null` decodes to
/// `Absent` and `Absent` encodes back to `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Absent,
    Present(T),
}

/// Net amount that may be null
pub type NetNullable = Nullable<Net>;

/// Gross amount that may be null
pub type GrossNullable = Nullable<Gross>;

impl<T> Nullable<T> {
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Present(value) => Some(value),
            Nullable::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Present(value) => Some(value),
            Nullable::Absent => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Present(value) => Nullable::Present(f(value)),
            Nullable::Absent => Nullable::Absent,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Present(value),
            None => Nullable::Absent,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

/// Slot for a field declared non-nullable.
///
/// Decoding never fails just because the value is missing; the slot records
/// the absence and the validation pass reports it as `RequiredValueMissing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required<T>(Nullable<T>);

impl<T> Required<T> {
    pub const fn new(value: T) -> Self {
        Self(Nullable::Present(value))
    }

    /// Slot whose value was null or not supplied.
    pub const fn missing() -> Self {
        Self(Nullable::Absent)
    }

    /// Validation hook: `false` means the required value is missing.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.0.is_present()
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_option()
    }

    pub fn into_option(self) -> Option<T> {
        self.0.into_option()
    }

    /// View as the nullable outcome of the decode.
    pub fn as_nullable(&self) -> &Nullable<T> {
        &self.0
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Self::missing()
    }
}

impl<T> From<Nullable<T>> for Required<T> {
    fn from(value: Nullable<T>) -> Self {
        Self(value)
    }
}
