//! Shared primitive types used across the crate.

/// Decimal helpers for basis-point conversions.
pub mod decimal;

/// Crate-wide error and result types.
pub mod error;
