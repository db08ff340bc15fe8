//! Types library for the crossing engine
//!
//! This library provides the core type definitions shared by the
//! matching engine and the line-protocol gateway.
//!
//! # Modules
//! - `ids`: Identifiers (OrderId, Symbol)
//! - `numeric`: Fixed-point price and quantity types
//! - `order`: Order entity and lifecycle
//! - `errors`: Rejection taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
}
