//! Core domain types for the trivia board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of category columns on a ready board.
pub const NUM_CATEGORIES: usize = 6;

/// Number of clue rows in each category.
pub const QUESTIONS_PER_CATEGORY: usize = 5;

/// Text shown in place of a clue that has not been revealed yet.
pub const HIDDEN_MARKER: &str = "?";

/// How far a clue has been revealed.
///
/// Only ever advances `Hidden -> QuestionShown -> AnswerShown`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RevealState {
    /// Nothing shown yet.
    #[default]
    Hidden,
    /// The question text is showing.
    QuestionShown,
    /// The answer text is showing. Terminal.
    AnswerShown,
}

/// A single clue on the board.
///
/// Question and answer text never change; only the board mutates the reveal state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Clue {
    question: String,
    answer: String,
    #[getter(skip)]
    reveal_state: RevealState,
}

impl Clue {
    /// Creates a hidden clue.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    /// Current reveal state.
    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// Advances the reveal state by one step.
    ///
    /// Returns the text to display, or `None` once the answer is already showing.
    pub(super) fn advance(&mut self) -> Option<&str> {
        match self.reveal_state {
            RevealState::Hidden => {
                self.reveal_state = RevealState::QuestionShown;
                Some(&self.question)
            }
            RevealState::QuestionShown => {
                self.reveal_state = RevealState::AnswerShown;
                Some(&self.answer)
            }
            RevealState::AnswerShown => None,
        }
    }

    /// The view of this clue as the player may see it right now.
    pub fn view(&self) -> CellView {
        match self.reveal_state {
            RevealState::Hidden => CellView::Hidden,
            RevealState::QuestionShown => CellView::Question(self.question.clone()),
            RevealState::AnswerShown => CellView::Answer(self.answer.clone()),
        }
    }
}

/// A titled column of clues.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a category from its title and sampled clues.
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub(super) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}

/// One game's worth of categories, in column order.
///
/// A clue is identified by its `(category, clue)` position, never by content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Creates a board from categories in column order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Returns the clue at the given position, if any.
    pub fn clue(&self, category: usize, clue: usize) -> Option<&Clue> {
        self.categories.get(category)?.clues().get(clue)
    }

    /// Checks the ready-board shape: `NUM_CATEGORIES` columns of
    /// `QUESTIONS_PER_CATEGORY` clues each.
    pub fn is_full_size(&self) -> bool {
        self.categories.len() == NUM_CATEGORIES
            && self
                .categories
                .iter()
                .all(|c| c.clues().len() == QUESTIONS_PER_CATEGORY)
    }

    pub(super) fn clue_mut(&mut self, category: usize, clue: usize) -> Option<&mut Clue> {
        self.categories.get_mut(category)?.clue_mut(clue)
    }
}

/// What the host should do with the clicked cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderInstruction {
    /// Replace the cell text.
    Display(String),
    /// Leave the cell untouched.
    NoChange,
}

/// Player-visible contents of one cell.
///
/// A hidden cell carries no clue text at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum CellView {
    /// Masked cell.
    Hidden,
    /// Question is showing.
    Question(String),
    /// Answer is showing.
    Answer(String),
}

impl CellView {
    /// Text to draw in the cell.
    pub fn text(&self) -> &str {
        match self {
            CellView::Hidden => HIDDEN_MARKER,
            CellView::Question(text) | CellView::Answer(text) => text,
        }
    }

    /// Applies a render instruction to this cell.
    ///
    /// `Display` text replaces the cell; which of question or answer it is
    /// follows from the cell's current state.
    pub fn apply(&mut self, instruction: &RenderInstruction) {
        if let RenderInstruction::Display(text) = instruction {
            *self = match self {
                CellView::Hidden => CellView::Question(text.clone()),
                CellView::Question(_) | CellView::Answer(_) => CellView::Answer(text.clone()),
            };
        }
    }
}

/// Column of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ColumnView {
    title: String,
    cells: Vec<CellView>,
}

/// Read-only, masked view of a board for full rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardSnapshot {
    columns: Vec<ColumnView>,
}

impl BoardSnapshot {
    /// Number of rows in the tallest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    /// Returns the cell at the given position, if any.
    pub fn cell(&self, category: usize, clue: usize) -> Option<&CellView> {
        self.columns.get(category)?.cells.get(clue)
    }

    /// Applies a render instruction to a single cell.
    pub fn apply(&mut self, category: usize, clue: usize, instruction: &RenderInstruction) {
        if let Some(cell) = self
            .columns
            .get_mut(category)
            .and_then(|c| c.cells.get_mut(clue))
        {
            cell.apply(instruction);
        }
    }

    /// Whether the snapshot has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let columns = board
            .categories()
            .iter()
            .map(|category| ColumnView {
                title: category.title().clone(),
                cells: category.clues().iter().map(Clue::view).collect(),
            })
            .collect();
        Self { columns }
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();
        writeln!(f, "{}", titles.join(" | "))?;
        for row in 0..self.row_count() {
            let cells: Vec<&str> = self
                .columns
                .iter()
                .map(|c| c.cells.get(row).map(CellView::text).unwrap_or(""))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}
