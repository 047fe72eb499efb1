//! Live game board and its reveal state machine.

use tracing::{debug, error, instrument};

use super::error::BoardError;
use super::types::{Board, BoardSnapshot, RenderInstruction};

/// Owns the live [`Board`] and every mutation of clue reveal state.
///
/// A reveal walks one clue forward:
///
/// | state            | result                  |
/// |------------------|-------------------------|
/// | `Hidden`         | `Display(question)`     |
/// | `QuestionShown`  | `Display(answer)`       |
/// | `AnswerShown`    | `NoChange`              |
///
/// Nothing resets a clue; a fresh game replaces the whole model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardModel {
    board: Board,
}

impl BoardModel {
    /// Wraps a freshly dealt board.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Returns the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reveals the next stage of the clue at `(category, clue)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if either index falls outside
    /// the board.
    #[instrument(skip(self))]
    pub fn reveal(&mut self, category: usize, clue: usize) -> Result<RenderInstruction, BoardError> {
        let Some(target) = self.board.clue_mut(category, clue) else {
            error!(category, clue, "Reveal outside the board");
            return Err(BoardError::IndexOutOfRange { category, clue });
        };

        let instruction = match target.advance() {
            Some(text) => RenderInstruction::Display(text.to_string()),
            None => RenderInstruction::NoChange,
        };
        debug!(state = %target.reveal_state(), "Clue revealed");
        Ok(instruction)
    }

    /// Masked view of the whole board for a full redraw.
    pub fn render_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }
}
