//! Input parse errors
//!
//! The `Display` text of each variant is the wire error message,
//! rendered after the `E ` result code. Missing-field and
//! malformed-field messages use different capitalizations of the field
//! name, matching the published format.

use thiserror::Error;

/// The field being parsed when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Action,
    Oid,
    Symbol,
    Side,
    Quantity,
    Price,
}

impl Field {
    /// Name used in "Expected ... in input" messages
    fn lower(&self) -> &'static str {
        match self {
            Field::Action => "action",
            Field::Oid => "OID",
            Field::Symbol => "symbol",
            Field::Side => "side",
            Field::Quantity => "quantity",
            Field::Price => "price",
        }
    }

    /// Name used in "... is malformed" messages
    fn upper(&self) -> &'static str {
        match self {
            Field::Action => "Action",
            Field::Oid => "OID",
            Field::Symbol => "Symbol",
            Field::Side => "Side",
            Field::Quantity => "Quantity",
            Field::Price => "Price",
        }
    }
}

/// Rejections produced while tokenizing and validating an input line
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {} in input", .0.lower())]
    Missing(Field),

    #[error("{} is malformed", .0.upper())]
    Malformed(Field),

    #[error("Unknown action {0}")]
    UnknownAction(char),

    #[error("Expected positive OID")]
    NonPositiveOid,

    #[error("Expected positive quantity in input")]
    NonPositiveQuantity,

    #[error("Symbol size exceeds max symbol size")]
    SymbolTooLong,

    #[error("Symbol is not alphanumeric")]
    SymbolNotAlphanumeric,

    #[error("Side must be either 'B' or 'S'")]
    InvalidSide,

    #[error("Expected end of input")]
    TrailingInput,
}
