//! Order entity and lifecycle
//!
//! An order is created, matched immediately, and is then either resting
//! in its symbol's book, fully filled, or canceled. Identity, side and
//! price are immutable; only the open quantity and book membership
//! change over its life.

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Single-character wire code
    pub fn code(&self) -> char {
        match self {
            Side::Buy => 'B',
            Side::Sell => 'S',
        }
    }
}

/// A limit order
///
/// The engine's identity table owns every `Order` for the lifetime of
/// the process; books refer to orders only through their `(price, oid)`
/// sort key, which is stable because both fields are immutable. The
/// open quantity starts at the requested amount and only ever
/// decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub oid: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    quantity: Quantity,
    resting: bool,
}

impl Order {
    /// Create a new order, not yet in any book
    pub fn new(oid: OrderId, symbol: Symbol, side: Side, quantity: Quantity, price: Price) -> Self {
        Self {
            oid,
            symbol,
            side,
            price,
            quantity,
            resting: false,
        }
    }

    /// Remaining open quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Check if the order is completely filled (terminal)
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Check if the order currently occupies a book slot
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    /// Apply a fill, decreasing the open quantity
    ///
    /// Book membership is untouched: the sort key does not depend on
    /// quantity, so a partial fill keeps the order's position.
    ///
    /// # Panics
    /// Panics if the fill exceeds the open quantity
    pub fn fill(&mut self, filled: Quantity) {
        self.quantity = self.quantity.fill(filled);
    }

    /// Mark the order as resting in its symbol's book
    pub fn rest(&mut self) {
        debug_assert!(!self.is_filled(), "a filled order cannot rest");
        self.resting = true;
    }

    /// Mark the order as no longer in any book
    pub fn leave_book(&mut self) {
        self.resting = false;
    }
}
