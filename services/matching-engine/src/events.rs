//! Events emitted by engine operations
//!
//! Each event renders to exactly one line of the wire format via
//! `Display`; the caller prints them verbatim, in order.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::errors::OrderError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::Side;

/// One output event produced by place, cancel or snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Partial or complete fill of one order by a crossing event
    ///
    /// Every match produces two of these: the aggressor's fill first,
    /// then the resting order's, both at the resting order's price.
    Fill {
        oid: OrderId,
        symbol: Symbol,
        quantity: Quantity,
        price: Price,
    },

    /// Cancel confirmation
    Canceled { oid: OrderId },

    /// One resting order in a book snapshot
    BookEntry {
        oid: OrderId,
        symbol: Symbol,
        side: Side,
        open_quantity: Quantity,
        price: Price,
    },

    /// Rejected request
    Rejected(OrderError),
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineEvent::Fill {
                oid,
                symbol,
                quantity,
                price,
            } => write!(f, "F {oid} {symbol} {quantity} {price}"),
            EngineEvent::Canceled { oid } => write!(f, "X {oid}"),
            EngineEvent::BookEntry {
                oid,
                symbol,
                side,
                open_quantity,
                price,
            } => write!(f, "P {oid} {symbol} {} {open_quantity} {price}", side.code()),
            EngineEvent::Rejected(err) => write!(f, "E {err}"),
        }
    }
}
