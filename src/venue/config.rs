//! Static venue and asset configuration.

use std::collections::HashMap;

use crate::Decimal;
use crate::types::error::{VCError, VCResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Venue identifier.
///
/// Ordering is lexical and is used as the deterministic tie-breaker when
/// two venues produce identical total costs.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::venue::VenueId;
///
/// let id = VenueId::new("hyperliquid");
/// assert_eq!(id.as_str(), "hyperliquid");
/// assert!(VenueId::new("avantis") < id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VenueId(String);

impl VenueId {
    /// Creates a venue identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the engine prices execution on a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VenueCapability {
    /// A real order book is available; the level walker runs against it.
    Walkable,
    /// No live book; a constant assumed spread stands in for slippage and
    /// every result is tagged `estimated`.
    Estimated {
        /// The spread assumed in place of walked slippage, in bps.
        assumed_spread_bps: Decimal,
    },
}

/// One venue's entry in a comparison: identifier plus capability.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::venue::{VenueCapability, VenueConfig};
/// use venue_cost_rs::dec;
///
/// let walkable = VenueConfig::walkable("hyperliquid");
/// let estimated = VenueConfig::estimated("ostium", dec!(3.0)).unwrap();
/// assert!(matches!(walkable.capability(), VenueCapability::Walkable));
/// assert!(matches!(estimated.capability(), VenueCapability::Estimated { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VenueConfig {
    venue_id: VenueId,
    capability: VenueCapability,
}

impl VenueConfig {
    /// A venue whose book the walker consumes directly.
    #[must_use]
    pub fn walkable(venue_id: impl Into<String>) -> Self {
        Self {
            venue_id: VenueId::new(venue_id),
            capability: VenueCapability::Walkable,
        }
    }

    /// A venue priced by a configured assumed spread instead of a book.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidConfiguration` if the spread is negative.
    pub fn estimated(
        venue_id: impl Into<String>,
        assumed_spread_bps: Decimal,
    ) -> VCResult<Self> {
        if assumed_spread_bps < Decimal::ZERO {
            return Err(VCError::InvalidConfiguration(
                "assumed spread must not be negative".to_string(),
            ));
        }
        Ok(Self {
            venue_id: VenueId::new(venue_id),
            capability: VenueCapability::Estimated { assumed_spread_bps },
        })
    }

    /// The venue identifier.
    #[must_use]
    pub const fn venue_id(&self) -> &VenueId {
        &self.venue_id
    }

    /// The venue's pricing capability.
    #[must_use]
    pub const fn capability(&self) -> &VenueCapability {
        &self.capability
    }
}

/// Fee category an instrument belongs to on most venues.
///
/// Fee schedules are commonly published per category rather than per
/// instrument; the category is the lookup key a
/// [`FeeScheduleProvider`](super::FeeScheduleProvider) receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AssetCategory {
    /// Crypto perpetuals.
    Crypto,
    /// Single-name equities.
    Equities,
    /// Equity indices.
    Indices,
    /// Major forex pairs.
    ForexMajor,
    /// Minor forex pairs.
    ForexMinor,
    /// Gold.
    Gold,
    /// Silver.
    Silver,
}

/// A canonical asset and its per-venue instrument symbols.
///
/// The same asset trades under different symbols across venues (gold is
/// `PAXG` on one venue, `XAU` on another, `XAUUSD` on a third). The alias
/// map makes that translation explicit configuration; venues without an
/// alias use the canonical symbol.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::venue::{Asset, AssetCategory, VenueId};
///
/// let gold = Asset::new("GOLD", AssetCategory::Gold)
///     .with_alias("hyperliquid", "PAXG")
///     .with_alias("lighter", "XAU");
///
/// assert_eq!(gold.symbol_for(&VenueId::new("hyperliquid")), "PAXG");
/// assert_eq!(gold.symbol_for(&VenueId::new("ostium")), "GOLD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Asset {
    symbol: String,
    category: AssetCategory,
    aliases: HashMap<VenueId, String>,
}

impl Asset {
    /// Creates an asset with no venue aliases.
    #[must_use]
    pub fn new(symbol: impl Into<String>, category: AssetCategory) -> Self {
        Self {
            symbol: symbol.into(),
            category,
            aliases: HashMap::new(),
        }
    }

    /// Adds a venue-specific instrument symbol.
    #[must_use]
    pub fn with_alias(mut self, venue_id: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.aliases.insert(VenueId::new(venue_id), symbol.into());
        self
    }

    /// The canonical symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The asset's fee category.
    #[must_use]
    pub const fn category(&self) -> AssetCategory {
        self.category
    }

    /// The instrument symbol to use on a venue: the alias when one is
    /// configured, the canonical symbol otherwise.
    #[must_use]
    pub fn symbol_for(&self, venue_id: &VenueId) -> &str {
        self.aliases
            .get(venue_id)
            .map_or(self.symbol.as_str(), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_venue_id_ordering_is_lexical() {
        let mut ids = vec![
            VenueId::new("ostium"),
            VenueId::new("avantis"),
            VenueId::new("lighter"),
            VenueId::new("hyperliquid"),
        ];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(VenueId::as_str).collect();
        assert_eq!(names, vec!["avantis", "hyperliquid", "lighter", "ostium"]);
    }

    #[test]
    fn test_estimated_requires_non_negative_spread() {
        assert!(VenueConfig::estimated("ostium", dec!(3.0)).is_ok());
        assert!(VenueConfig::estimated("ostium", Decimal::ZERO).is_ok());
        assert!(matches!(
            VenueConfig::estimated("ostium", dec!(-1.0)),
            Err(VCError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_asset_alias_fallback() {
        let asset = Asset::new("SPY", AssetCategory::Indices).with_alias("avantis", "SPYUSD");
        assert_eq!(asset.symbol_for(&VenueId::new("avantis")), "SPYUSD");
        assert_eq!(asset.symbol_for(&VenueId::new("hyperliquid")), "SPY");
        assert_eq!(asset.category(), AssetCategory::Indices);
    }
}
