//! Rejection taxonomy for order requests
//!
//! The `Display` text of each variant is the wire error message,
//! rendered after the `E ` result code.

use crate::ids::OrderId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections reported by the matching engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderError {
    /// A place request reused an id that already exists in the
    /// identity table
    #[error("{0} Duplicate order id")]
    DuplicateId(OrderId),

    /// Cancel target has already been completely filled
    #[error("Already filled order {0}")]
    AlreadyFilled(OrderId),

    /// Cancel target was already canceled
    #[error("Already canceled order {0}")]
    AlreadyCanceled(OrderId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = OrderError::DuplicateId(OrderId::new(10008));
        assert_eq!(err.to_string(), "10008 Duplicate order id");
    }

    #[test]
    fn test_already_filled_display() {
        let err = OrderError::AlreadyFilled(OrderId::new(10002));
        assert_eq!(err.to_string(), "Already filled order 10002");
    }

    #[test]
    fn test_already_canceled_display() {
        let err = OrderError::AlreadyCanceled(OrderId::new(10002));
        assert_eq!(err.to_string(), "Already canceled order 10002");
    }
}
