//! Trivia board: clues, categories, sampling and the reveal state machine.

mod error;
mod model;
mod sampler;
mod types;

pub use error::{BoardError, InsufficientPoolError};
pub use model::BoardModel;
pub use sampler::BoardSampler;
pub use types::{
    Board, BoardSnapshot, Category, CellView, Clue, ColumnView, HIDDEN_MARKER, NUM_CATEGORIES,
    QUESTIONS_PER_CATEGORY, RenderInstruction, RevealState,
};
