// ============================================================================
// Domain Models Module
// Typed monetary value objects
// ============================================================================

pub mod nullable;
pub mod tagged;

pub use nullable::{GrossNullable, NetNullable, Nullable, Required};
pub use tagged::{AmountKind, Gross, GrossKind, Net, NetKind, Tagged};
