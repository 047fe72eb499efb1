//! Host-side view state for the trivia board.

use jeopardy::{BoardError, BoardSnapshot, RenderInstruction, SetupError};
use tracing::{debug, warn};

use super::input::{Cursor, Direction};

/// Where the host is in the deal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A deal is in flight; reveal and restart are disabled.
    Loading,
    /// Accepting input.
    Idle,
}

/// Main application state.
///
/// Holds the rendered grid only; the controller owns the real board.
#[derive(Debug)]
pub struct App {
    snapshot: BoardSnapshot,
    cursor: Cursor,
    phase: Phase,
    status_message: String,
}

impl App {
    /// Creates an app waiting for its first board.
    pub fn new() -> Self {
        Self {
            snapshot: BoardSnapshot::default(),
            cursor: Cursor::default(),
            phase: Phase::Loading,
            status_message: "Loading...".to_string(),
        }
    }

    /// Gets the rendered grid.
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Gets the cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether a deal is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether a reveal may be forwarded to the controller.
    pub fn can_reveal(&self) -> bool {
        self.phase == Phase::Idle && !self.snapshot.is_empty()
    }

    /// Enters the loading view.
    pub fn begin_loading(&mut self) {
        debug!("Entering loading view");
        self.phase = Phase::Loading;
        self.status_message = "Loading...".to_string();
    }

    /// Leaves the loading view with the outcome of a deal.
    ///
    /// A failed deal keeps whatever grid was showing before.
    pub fn finish_loading(&mut self, result: Result<BoardSnapshot, SetupError>) {
        self.phase = Phase::Idle;
        match result {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.cursor = Cursor::default();
                self.status_message =
                    "Enter reveals, arrows move, 'r' deals a new board, 'q' quits.".to_string();
            }
            Err(e) => {
                warn!(error = %e, "Deal failed");
                self.status_message = format!("{}. Press 'r' to retry or 'q' to quit.", e);
            }
        }
    }

    /// Moves the cursor within the grid.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.moved(
            direction,
            self.snapshot.columns().len(),
            self.snapshot.row_count(),
        );
    }

    /// Puts the cursor on a specific cell.
    pub fn select(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Applies a reveal outcome to the cell under the cursor.
    pub fn apply_reveal(&mut self, result: Result<RenderInstruction, BoardError>) {
        match result {
            Ok(instruction) => {
                debug!(?instruction, cursor = ?self.cursor, "Applying reveal");
                self.snapshot
                    .apply(self.cursor.category, self.cursor.clue, &instruction);
            }
            Err(e) => {
                warn!(error = %e, "Reveal rejected");
                self.status_message = e.to_string();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
