//! Fee schedule variants and construction.

use crate::Decimal;
use crate::types::error::{VCError, VCResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of venue cost structures.
///
/// Every venue's fee model observed in the field reduces to one of these
/// four shapes; anything new must be added here rather than hard-coded at a
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeeKind {
    /// Proportional fee in basis points of the filled notional.
    Bps {
        /// Charged when opening the position.
        opening_bps: Decimal,
        /// Charged when closing; applied only to round-trip costings.
        closing_bps: Decimal,
    },
    /// Flat currency amount per trade, independent of size.
    FixedCurrency {
        /// Fee in USD.
        amount: Decimal,
    },
    /// A share of realized profit, charged at position close.
    ///
    /// Not computable without a realized-PnL input; assessments report a
    /// zero fee and are marked indicative.
    ProfitShare {
        /// Fraction of profit taken, in [0, 1].
        share_fraction: Decimal,
    },
    /// No fee at all.
    Zero,
}

/// A venue's validated, immutable fee schedule.
///
/// Carries the fee variant plus the optional `forced_zero_slippage` flag:
/// venues offering synthetic zero-slippage execution on designated
/// instruments report zero slippage regardless of what a book walk would
/// have produced.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::fees::FeeSchedule;
/// use venue_cost_rs::dec;
///
/// let taker = FeeSchedule::bps(dec!(4.5), dec!(4.5)).unwrap();
/// assert!(!taker.forced_zero_slippage());
///
/// // Validation rejects nonsense values.
/// assert!(FeeSchedule::bps(dec!(-1.0), dec!(0.0)).is_err());
/// assert!(FeeSchedule::profit_share(dec!(1.5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeeSchedule {
    kind: FeeKind,
    forced_zero_slippage: bool,
}

impl FeeSchedule {
    /// Creates a schedule from a fee variant, validating its values.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidConfiguration` if:
    /// - a bps value is negative
    /// - a fixed amount is negative
    /// - a profit share fraction is outside [0, 1]
    pub fn new(kind: FeeKind) -> VCResult<Self> {
        match kind {
            FeeKind::Bps {
                opening_bps,
                closing_bps,
            } => {
                if opening_bps < Decimal::ZERO || closing_bps < Decimal::ZERO {
                    return Err(VCError::InvalidConfiguration(
                        "fee bps must not be negative".to_string(),
                    ));
                }
            }
            FeeKind::FixedCurrency { amount } => {
                if amount < Decimal::ZERO {
                    return Err(VCError::InvalidConfiguration(
                        "fixed fee amount must not be negative".to_string(),
                    ));
                }
            }
            FeeKind::ProfitShare { share_fraction } => {
                if share_fraction < Decimal::ZERO || share_fraction > Decimal::ONE {
                    return Err(VCError::InvalidConfiguration(
                        "profit share fraction must be between 0 and 1".to_string(),
                    ));
                }
            }
            FeeKind::Zero => {}
        }
        Ok(Self {
            kind,
            forced_zero_slippage: false,
        })
    }

    /// Proportional schedule: `opening_bps` on entry, `closing_bps` on exit.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidConfiguration` on negative bps.
    pub fn bps(opening_bps: Decimal, closing_bps: Decimal) -> VCResult<Self> {
        Self::new(FeeKind::Bps {
            opening_bps,
            closing_bps,
        })
    }

    /// Flat per-trade schedule.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidConfiguration` on a negative amount.
    pub fn fixed(amount: Decimal) -> VCResult<Self> {
        Self::new(FeeKind::FixedCurrency { amount })
    }

    /// Profit-share schedule.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidConfiguration` if the fraction is outside [0, 1].
    pub fn profit_share(share_fraction: Decimal) -> VCResult<Self> {
        Self::new(FeeKind::ProfitShare { share_fraction })
    }

    /// Zero-fee schedule.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            kind: FeeKind::Zero,
            forced_zero_slippage: false,
        }
    }

    /// Marks the schedule as zero-slippage for its instrument: the walked
    /// slippage is discarded, not averaged in.
    #[must_use]
    pub const fn with_forced_zero_slippage(mut self) -> Self {
        self.forced_zero_slippage = true;
        self
    }

    /// The fee variant.
    #[must_use]
    pub const fn kind(&self) -> FeeKind {
        self.kind
    }

    /// Whether the venue guarantees zero slippage for this instrument.
    #[must_use]
    pub const fn forced_zero_slippage(&self) -> bool {
        self.forced_zero_slippage
    }
}
