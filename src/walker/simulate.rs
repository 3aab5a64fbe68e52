//! The greedy level walk.

use crate::Decimal;
use crate::book::{OrderBook, OrderBookSide};
use crate::types::error::VCResult;

use super::fill::FillResult;
use super::request::{ExecutionRequest, Side};

/// Remaining size at or below this threshold counts as filled, in the
/// walk's unit (USD for buys, base quantity for sells). Absorbs the dust a
/// partial level consumption can leave behind.
pub const FILL_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 4); // 0.0001

/// Simulates a market order against the book and reports the fill.
///
/// Buys walk the asks spending the USD notional directly. Sells convert
/// the notional to a base quantity at the book's mid price, then walk the
/// bids consuming quantity. Either way the walk is greedy and strictly
/// in canonical order; identical inputs produce identical results.
///
/// # Errors
///
/// Returns `VCError::InvalidRequest` if the request's notional is not
/// positive. Exhausting the book is not an error.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::book::OrderBook;
/// use venue_cost_rs::walker::{simulate_fill, ExecutionRequest};
/// use venue_cost_rs::dec;
///
/// let book = OrderBook::from_raw(
///     &[(dec!(99.0), dec!(3.0))],
///     &[(dec!(101.0), dec!(5.0))],
///     0,
/// )
/// .unwrap();
///
/// // Sell $1000 at mid 100: target quantity 10, only 3 on the bids.
/// let fill = simulate_fill(&book, &ExecutionRequest::sell(dec!(1000.0)).unwrap()).unwrap();
/// assert!(!fill.filled);
/// assert_eq!(fill.remaining, dec!(7.0));
/// assert_eq!(fill.fill_percent, dec!(29.7));
/// ```
pub fn simulate_fill(book: &OrderBook, request: &ExecutionRequest) -> VCResult<FillResult> {
    request.validate()?;
    match request.side {
        Side::Buy => Ok(walk_notional(book.asks(), request.notional_usd)),
        Side::Sell => {
            let target_quantity = request.notional_usd / book.mid_price();
            Ok(walk_quantity(book.bids(), target_quantity, request.notional_usd))
        }
    }
}

/// Walks a side spending a USD target. Used for buys against the asks.
fn walk_notional(side: &OrderBookSide, target_usd: Decimal) -> FillResult {
    let mut remaining = target_usd;
    let mut quantity = Decimal::ZERO;
    let mut cost = Decimal::ZERO;
    let mut levels_consumed = 0usize;
    let mut best_price = Decimal::ZERO;
    let mut worst_price = Decimal::ZERO;

    for level in side.iter() {
        if remaining <= FILL_TOLERANCE {
            break;
        }
        if levels_consumed == 0 {
            best_price = level.price();
        }
        worst_price = level.price();
        levels_consumed += 1;

        let capacity = level.notional();
        if remaining <= capacity {
            // Partial consumption: spend exactly what is left.
            quantity += remaining / level.price();
            cost += remaining;
            remaining = Decimal::ZERO;
            break;
        }
        quantity += level.quantity();
        cost += capacity;
        remaining -= capacity;
    }

    assemble(
        target_usd,
        remaining,
        quantity,
        cost,
        levels_consumed,
        best_price,
        worst_price,
    )
}

/// Walks a side consuming a base-quantity target. Used for sells against
/// the bids, after the USD notional has been converted at the mid price.
fn walk_quantity(
    side: &OrderBookSide,
    target_quantity: Decimal,
    notional_usd: Decimal,
) -> FillResult {
    let mut remaining = target_quantity;
    let mut quantity = Decimal::ZERO;
    let mut proceeds = Decimal::ZERO;
    let mut levels_consumed = 0usize;
    let mut best_price = Decimal::ZERO;
    let mut worst_price = Decimal::ZERO;

    for level in side.iter() {
        if remaining <= FILL_TOLERANCE {
            break;
        }
        if levels_consumed == 0 {
            best_price = level.price();
        }
        worst_price = level.price();
        levels_consumed += 1;

        if remaining <= level.quantity() {
            proceeds += remaining * level.price();
            quantity += remaining;
            remaining = Decimal::ZERO;
            break;
        }
        proceeds += level.notional();
        quantity += level.quantity();
        remaining -= level.quantity();
    }

    assemble(
        notional_usd,
        remaining,
        quantity,
        proceeds,
        levels_consumed,
        best_price,
        worst_price,
    )
}

fn assemble(
    notional_usd: Decimal,
    remaining: Decimal,
    quantity: Decimal,
    filled_notional: Decimal,
    levels_consumed: usize,
    best_price: Decimal,
    worst_price: Decimal,
) -> FillResult {
    if levels_consumed == 0 {
        return FillResult::unfilled(remaining);
    }

    let filled = remaining <= FILL_TOLERANCE;
    let fill_percent = if filled {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ONE_HUNDRED * filled_notional / notional_usd
    };
    let avg_price = if quantity > Decimal::ZERO {
        filled_notional / quantity
    } else {
        Decimal::ZERO
    };

    FillResult {
        filled,
        filled_notional_usd: filled_notional,
        filled_quantity: quantity,
        avg_price,
        levels_consumed,
        remaining,
        fill_percent,
        best_price,
        worst_price,
    }
}
