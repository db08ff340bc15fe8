//! Identifier types for engine entities
//!
//! Order ids are caller-assigned rather than generated: the feed
//! supplies them and the engine enforces process-lifetime uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length of a symbol in characters
pub const MAX_SYMBOL_LEN: usize = 8;

/// Unique identifier for an order
///
/// A positive 32-bit integer assigned by the caller. Assignment order
/// approximates arrival time, so the id doubles as the FIFO tie-break
/// among equal-priced resting orders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    /// Create an OrderId from its integer value
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument symbol
///
/// Short alphanumeric string, at most 8 characters. Orders for
/// different symbols never cross.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from a string
    ///
    /// # Panics
    /// Panics if the string is too long or not alphanumeric
    pub fn new(symbol: impl Into<String>) -> Self {
        let s: String = symbol.into();
        s.parse()
            .expect("symbol must be at most 8 alphanumeric characters")
    }

    /// Try to create a symbol, returning None if invalid
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s: String = symbol.into();
        s.parse().ok()
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong);
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SymbolError::NotAlphanumeric);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from validating a symbol
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol exceeds {MAX_SYMBOL_LEN} characters")]
    TooLong,

    #[error("symbol contains non-alphanumeric characters")]
    NotAlphanumeric,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_display() {
        assert_eq!(OrderId::new(10000).to_string(), "10000");
    }

    #[test]
    fn test_order_id_ordering_follows_value() {
        assert!(OrderId::new(10000) < OrderId::new(10001));
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_symbol_creation() {
        let symbol = Symbol::new("IBM");
        assert_eq!(symbol.as_str(), "IBM");
    }

    #[test]
    fn test_symbol_max_length() {
        assert!(Symbol::try_new("ABCDEFGH").is_some());
        assert_eq!("ABCDEFGHI".parse::<Symbol>(), Err(SymbolError::TooLong));
    }

    #[test]
    fn test_symbol_alphanumeric_only() {
        assert!(Symbol::try_new("BRK2").is_some());
        assert_eq!(
            "BRK.B".parse::<Symbol>(),
            Err(SymbolError::NotAlphanumeric)
        );
    }

    #[test]
    #[should_panic(expected = "symbol must be at most 8 alphanumeric characters")]
    fn test_symbol_invalid_panics() {
        Symbol::new("TOOLONGSYM");
    }

    #[test]
    fn test_symbol_serialization() {
        let symbol = Symbol::new("IBM");
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"IBM\"");
    }
}
