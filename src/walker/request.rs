//! Execution request types.

use crate::Decimal;
use crate::types::error::{VCError, VCResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Market-order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Buy: walk the asks, spending USD.
    Buy,
    /// Sell: walk the bids, consuming base-asset quantity.
    Sell,
}

impl Side {
    /// Uppercase label, for display and report keys.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to simulate one market order.
///
/// The requested size is always USD-denominated; for sells the walker
/// converts it to a base quantity at the book's mid price.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::walker::{ExecutionRequest, Side};
/// use venue_cost_rs::dec;
///
/// let request = ExecutionRequest::new(Side::Buy, dec!(10000.0)).unwrap();
/// assert_eq!(request.side, Side::Buy);
///
/// // Non-positive notionals are rejected, never treated as a zero-fill.
/// assert!(ExecutionRequest::new(Side::Buy, dec!(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionRequest {
    /// Order side.
    pub side: Side,
    /// Requested order size in USD.
    pub notional_usd: Decimal,
}

impl ExecutionRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if `notional_usd` is not positive.
    pub fn new(side: Side, notional_usd: Decimal) -> VCResult<Self> {
        let request = Self { side, notional_usd };
        request.validate()?;
        Ok(request)
    }

    /// Shorthand for a buy request.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if `notional_usd` is not positive.
    pub fn buy(notional_usd: Decimal) -> VCResult<Self> {
        Self::new(Side::Buy, notional_usd)
    }

    /// Shorthand for a sell request.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if `notional_usd` is not positive.
    pub fn sell(notional_usd: Decimal) -> VCResult<Self> {
        Self::new(Side::Sell, notional_usd)
    }

    /// Checks the request invariants.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if `notional_usd` is not positive.
    pub fn validate(&self) -> VCResult<()> {
        if self.notional_usd <= Decimal::ZERO {
            return Err(VCError::InvalidRequest(format!(
                "notional must be positive, got {}",
                self.notional_usd
            )));
        }
        Ok(())
    }
}
