//! Bid (buy-side) order book
//!
//! Buy orders sort by price descending (best bid first), ties broken by
//! ascending oid. Ids are assigned in arrival order, so the tie-break
//! is FIFO among orders at the same price.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use types::ids::OrderId;
use types::numeric::Price;

/// Sort key for one resting buy order
///
/// Both fields are immutable on the order, so the key never has to be
/// recomputed while the order rests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BidKey {
    price: Price,
    oid: OrderId,
}

impl Ord for BidKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Highest price first, then earliest oid
        other
            .price
            .cmp(&self.price)
            .then_with(|| self.oid.cmp(&other.oid))
    }
}

impl PartialOrd for BidKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bid (buy) side of a symbol's book
///
/// Holds only `(price, oid)` keys; order storage lives in the engine's
/// identity table. Using a BTreeSet gives O(log n) membership changes
/// and deterministic iteration.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    keys: BTreeSet<BidKey>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resting order's key
    pub fn insert(&mut self, price: Price, oid: OrderId) {
        self.keys.insert(BidKey { price, oid });
    }

    /// Remove an order's key
    ///
    /// Returns true if the order was found and removed
    pub fn remove(&mut self, price: Price, oid: OrderId) -> bool {
        self.keys.remove(&BidKey { price, oid })
    }

    /// The best bid: highest price, earliest oid
    pub fn best(&self) -> Option<(Price, OrderId)> {
        self.keys.first().map(|key| (key.price, key.oid))
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of resting orders on this side
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Iterate in book order: price descending, oid ascending
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Price, OrderId)> + '_ {
        self.keys.iter().map(|key| (key.price, key.oid))
    }
}
