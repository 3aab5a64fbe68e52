//! Error types for the execution-cost engine.

use thiserror::Error;

/// Errors produced by the execution-cost engine.
///
/// The taxonomy is deliberately small. Insufficient liquidity is *not* an
/// error: a book that runs out before the target is met is reported as
/// `filled = false` on the fill, since a partial answer is still an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VCError {
    /// Malformed raw book data, or a required book side was empty.
    ///
    /// Fatal only to normalizing that one side.
    #[error("invalid level data: {0}")]
    InvalidLevel(String),

    /// The execution request itself was invalid (e.g. non-positive notional).
    ///
    /// Fatal to the computation for that size parameter.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A venue could not supply an order book or fee schedule.
    ///
    /// The venue is dropped from the current comparison; other venues
    /// proceed unaffected.
    #[error("venue unavailable: {0}")]
    VenueUnavailable(String),

    /// Static configuration was invalid (bad fee value, missing spread, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias used across the crate.
pub type VCResult<T> = Result<T, VCError>;
