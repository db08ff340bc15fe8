//! Ask (sell-side) order book
//!
//! Sell orders sort by price ascending (best ask first), ties broken by
//! ascending oid for FIFO matching at a price level.

use std::collections::BTreeSet;
use types::ids::OrderId;
use types::numeric::Price;

/// Sort key for one resting sell order
///
/// The derived ordering (price ascending, then oid ascending) is
/// already the matching order, so no manual `Ord` is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct AskKey {
    price: Price,
    oid: OrderId,
}

/// Ask (sell) side of a symbol's book
///
/// Holds only `(price, oid)` keys; order storage lives in the engine's
/// identity table.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    keys: BTreeSet<AskKey>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resting order's key
    pub fn insert(&mut self, price: Price, oid: OrderId) {
        self.keys.insert(AskKey { price, oid });
    }

    /// Remove an order's key
    ///
    /// Returns true if the order was found and removed
    pub fn remove(&mut self, price: Price, oid: OrderId) -> bool {
        self.keys.remove(&AskKey { price, oid })
    }

    /// The best ask: lowest price, earliest oid
    pub fn best(&self) -> Option<(Price, OrderId)> {
        self.keys.first().map(|key| (key.price, key.oid))
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of resting orders on this side
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Iterate in book order: price ascending, oid ascending
    ///
    /// Snapshots walk this in reverse, which is where the published
    /// sell-side ordering (price descending, most recent oid first)
    /// comes from.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Price, OrderId)> + '_ {
        self.keys.iter().map(|key| (key.price, key.oid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(int_part: u32) -> Price {
        Price::new(int_part, 0)
    }

    #[test]
    fn test_best_is_lowest_price() {
        let mut book = AskBook::new();
        book.insert(px(101), OrderId::new(1));
        book.insert(px(100), OrderId::new(2));
        book.insert(px(102), OrderId::new(3));

        assert_eq!(book.best(), Some((px(100), OrderId::new(2))));
    }

    #[test]
    fn test_fifo_tie_break_at_same_price() {
        let mut book = AskBook::new();
        book.insert(px(100), OrderId::new(9));
        book.insert(px(100), OrderId::new(2));

        assert_eq!(book.best(), Some((px(100), OrderId::new(2))));
    }

    #[test]
    fn test_remove() {
        let mut book = AskBook::new();
        book.insert(px(100), OrderId::new(1));
        assert!(book.remove(px(100), OrderId::new(1)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_reverse_iter_most_recent_first() {
        let mut book = AskBook::new();
        book.insert(px(101), OrderId::new(1));
        book.insert(px(102), OrderId::new(2));
        book.insert(px(102), OrderId::new(3));

        let entries: Vec<_> = book.iter().rev().collect();
        assert_eq!(
            entries,
            vec![
                (px(102), OrderId::new(3)),
                (px(102), OrderId::new(2)),
                (px(101), OrderId::new(1)),
            ]
        );
    }
}
