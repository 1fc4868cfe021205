//! Concrete calendar implementations.

/// Brazilian national calendar.
pub mod brazil;
