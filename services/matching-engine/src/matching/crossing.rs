//! Crossing detection logic
//!
//! Determines when an incoming order can trade against resting
//! liquidity based on price compatibility.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and an ask are compatible at the given prices
///
/// A buy matches a sell when the bid price is >= the ask price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order crosses the best resting price
///
/// Once this returns false the matching loop can stop: every entry
/// past the best one has a strictly worse price.
pub fn crosses(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::Buy => can_match(incoming_price, resting_price),
        Side::Sell => can_match(resting_price, incoming_price),
    }
}
