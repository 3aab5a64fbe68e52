//! Decimal helpers for basis-point arithmetic.

use crate::Decimal;

/// Basis points in one whole unit: a ratio of 1.0 equals 10,000 bps.
pub const BPS_PER_UNIT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Converts a dimensionless ratio into basis points.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::types::decimal::ratio_to_bps;
/// use venue_cost_rs::dec;
///
/// assert_eq!(ratio_to_bps(dec!(0.0001)), dec!(1.0));
/// assert_eq!(ratio_to_bps(dec!(0.01)), dec!(100));
/// ```
#[must_use]
pub fn ratio_to_bps(ratio: Decimal) -> Decimal {
    ratio * BPS_PER_UNIT
}

/// Converts basis points into a dimensionless ratio.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::types::decimal::bps_to_ratio;
/// use venue_cost_rs::dec;
///
/// assert_eq!(bps_to_ratio(dec!(4.5)), dec!(0.00045));
/// ```
#[must_use]
pub fn bps_to_ratio(bps: Decimal) -> Decimal {
    bps / BPS_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_ratio_to_bps() {
        assert_eq!(ratio_to_bps(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(ratio_to_bps(Decimal::ONE), dec!(10000));
        assert_eq!(ratio_to_bps(dec!(0.00035)), dec!(3.5));
    }

    #[test]
    fn test_bps_to_ratio() {
        assert_eq!(bps_to_ratio(dec!(10000)), Decimal::ONE);
        assert_eq!(bps_to_ratio(dec!(3.5)), dec!(0.00035));
    }

    #[test]
    fn test_round_trip() {
        let bps = dec!(6.35);
        assert_eq!(ratio_to_bps(bps_to_ratio(bps)), bps);
    }
}
