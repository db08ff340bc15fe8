//! Matching engine core
//!
//! Owns every order (keyed by id) and one order book per symbol, and
//! implements the three operations: place, cancel, snapshot.

use std::collections::BTreeMap;

use types::errors::OrderError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::book::OrderBook;
use crate::events::EngineEvent;
use crate::matching::crossing;

/// Price-time priority matching engine
///
/// The identity table is the sole owner of order storage and entries
/// are never removed, so repeated cancels of a finished order can be
/// answered precisely. Books hold only `(price, oid)` keys referring
/// back into the table.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    /// Every order ever accepted, keyed by id
    orders: BTreeMap<OrderId, Order>,
    /// Order books per symbol, created on first use
    books: BTreeMap<Symbol, OrderBook>,
}

impl MatchingEngine {
    /// Create a new empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a limit order
    ///
    /// Matches against the opposite side of the symbol's book while the
    /// order still crosses, then rests any remainder. Fill events come
    /// back in generation order: for each match the aggressor's fill
    /// line first, then the resting order's, both at the resting
    /// order's price.
    ///
    /// A rejected request emits a single error event and leaves all
    /// engine state untouched.
    pub fn place(
        &mut self,
        oid: OrderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Vec<EngineEvent> {
        match self.try_place(oid, symbol, side, quantity, price) {
            Ok(events) => events,
            Err(err) => vec![EngineEvent::Rejected(err)],
        }
    }

    fn try_place(
        &mut self,
        oid: OrderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Result<Vec<EngineEvent>, OrderError> {
        if self.orders.contains_key(&oid) {
            return Err(OrderError::DuplicateId(oid));
        }

        // The aggressor stays a local value until matching completes;
        // it enters the identity table exactly once, below.
        let mut order = Order::new(oid, symbol.clone(), side, quantity, price);
        let mut events = Vec::new();

        let book = self.books.entry(symbol).or_default();

        while !order.is_filled() {
            let best = match side {
                Side::Buy => book.asks.best(),
                Side::Sell => book.bids.best(),
            };
            let Some((best_price, best_oid)) = best else {
                break;
            };
            if !crossing::crosses(side, price, best_price) {
                break;
            }

            let resting = self
                .orders
                .get_mut(&best_oid)
                .expect("book key with no identity-table entry");

            let filled = order.quantity().min(resting.quantity());
            events.push(EngineEvent::Fill {
                oid: order.oid,
                symbol: order.symbol.clone(),
                quantity: filled,
                price: best_price,
            });
            events.push(EngineEvent::Fill {
                oid: resting.oid,
                symbol: resting.symbol.clone(),
                quantity: filled,
                price: best_price,
            });

            order.fill(filled);
            resting.fill(filled);

            if resting.is_filled() {
                resting.leave_book();
                let removed = match side {
                    Side::Buy => book.asks.remove(best_price, best_oid),
                    Side::Sell => book.bids.remove(best_price, best_oid),
                };
                debug_assert!(removed, "filled order was not in the book");
            }
        }

        if !order.is_filled() {
            order.rest();
            match side {
                Side::Buy => book.bids.insert(price, oid),
                Side::Sell => book.asks.insert(price, oid),
            }
        }
        self.orders.insert(oid, order);

        Ok(events)
    }

    /// Cancel a resting order
    ///
    /// Unknown ids are ignored without output. Cancels of a filled or
    /// already-canceled order are reported as errors and change
    /// nothing.
    pub fn cancel(&mut self, oid: OrderId) -> Vec<EngineEvent> {
        let Some(order) = self.orders.get_mut(&oid) else {
            return Vec::new();
        };
        if order.is_filled() {
            return vec![EngineEvent::Rejected(OrderError::AlreadyFilled(oid))];
        }
        if !order.is_resting() {
            return vec![EngineEvent::Rejected(OrderError::AlreadyCanceled(oid))];
        }

        order.leave_book();
        let symbol = order.symbol.clone();
        let side = order.side;
        let price = order.price;

        let book = self
            .books
            .get_mut(&symbol)
            .expect("resting order with no book");
        let removed = match side {
            Side::Buy => book.bids.remove(price, oid),
            Side::Sell => book.asks.remove(price, oid),
        };
        debug_assert!(removed, "resting order was not in the book");

        vec![EngineEvent::Canceled { oid }]
    }

    /// Dump every resting order, one book entry event per order
    ///
    /// Symbols appear in ascending order. Within a symbol the sell side
    /// prints first, price descending with the most recently placed
    /// order first at a level, then the buy side, price descending with
    /// the earliest order first at a level. The asymmetric tie-break is
    /// part of the published output format and must not change.
    pub fn snapshot(&self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        for book in self.books.values() {
            for (_, oid) in book.asks.iter().rev() {
                events.push(self.book_entry(oid));
            }
            for (_, oid) in book.bids.iter() {
                events.push(self.book_entry(oid));
            }
        }
        events
    }

    fn book_entry(&self, oid: OrderId) -> EngineEvent {
        let order = self
            .orders
            .get(&oid)
            .expect("book key with no identity-table entry");
        EngineEvent::BookEntry {
            oid: order.oid,
            symbol: order.symbol.clone(),
            side: order.side,
            open_quantity: order.quantity(),
            price: order.price,
        }
    }
}
