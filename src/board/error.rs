//! Board error types.

use derive_more::{Display, Error};

/// A pool held fewer items than a board needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Insufficient pool: need {required}, only {available} available")]
pub struct InsufficientPoolError {
    /// Items requested.
    pub required: usize,
    /// Items in the pool.
    pub available: usize,
}

/// Error raised by a reveal on the live board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A reveal targeted a position outside the board.
    #[display("Clue ({category}, {clue}) is outside the board")]
    IndexOutOfRange {
        /// Requested category index.
        category: usize,
        /// Requested clue index.
        clue: usize,
    },
}
