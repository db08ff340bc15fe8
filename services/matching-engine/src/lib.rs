//! Matching Engine
//!
//! Single-writer limit-order matching engine implementing price-time
//! priority. One action is fully processed before the next is
//! accepted; every operation returns the complete, ordered event
//! sequence it produced.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Orders of the same side or different symbols never cross
//! - Conservation of quantity across a crossing event

pub mod book;
pub mod engine;
pub mod events;
pub mod matching;

pub use engine::MatchingEngine;
pub use events::EngineEvent;
