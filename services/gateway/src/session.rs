//! Feed session: one engine, one line at a time
//!
//! Maps each input line to the ordered list of output lines for it. A
//! bad line produces its error line and nothing else; the session
//! stays usable for the next line.

use matching_engine::MatchingEngine;

use crate::parser::{self, Action};

/// A single client session over the line protocol
#[derive(Debug, Default)]
pub struct Session {
    engine: MatchingEngine,
}

impl Session {
    /// Create a session with an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input line, returning the lines to print in order
    ///
    /// An empty input line yields a single empty output line, distinct
    /// from any error.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        if line.is_empty() {
            return vec![String::new()];
        }

        let action = match parser::parse_line(line) {
            Ok(action) => action,
            Err(err) => return vec![format!("E {err}")],
        };

        let events = match action {
            Action::Place {
                oid,
                symbol,
                side,
                quantity,
                price,
            } => self.engine.place(oid, symbol, side, quantity, price),
            Action::Cancel { oid } => self.engine.cancel(oid),
            Action::Print => self.engine.snapshot(),
        };
        events.iter().map(|event| event.to_string()).collect()
    }
}
