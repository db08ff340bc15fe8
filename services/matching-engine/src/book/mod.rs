//! Per-symbol order book structures
//!
//! One `OrderBook` per symbol, created lazily on first reference. Each
//! side is an ordered set of `(price, oid)` keys; the engine's identity
//! table owns the orders themselves, so an order appears in at most one
//! side and only while it is resting.

pub mod ask_book;
pub mod bid_book;

pub use ask_book::AskBook;
pub use bid_book::BidBook;

/// Order book for a single symbol
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Buy side, price descending
    pub bids: BidBook,
    /// Sell side, price ascending
    pub asks: AskBook,
}

impl OrderBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }
}
