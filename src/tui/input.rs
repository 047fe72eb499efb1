//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;

/// Direction of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous category.
    Left,
    /// Next category.
    Right,
    /// Previous clue.
    Up,
    /// Next clue.
    Down,
}

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Move(Direction),
    /// Reveal the clue under the cursor.
    Reveal,
    /// Deal a fresh board.
    Restart,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Reveal,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Cell under the cursor, as `(category, clue)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column index.
    pub category: usize,
    /// Row index.
    pub clue: usize,
}

impl Cursor {
    /// Moves one step, staying inside a `columns` x `rows` grid.
    pub fn moved(self, direction: Direction, columns: usize, rows: usize) -> Self {
        let Self { category, clue } = self;
        match direction {
            Direction::Left => Self {
                category: category.saturating_sub(1),
                clue,
            },
            Direction::Right if category + 1 < columns => Self {
                category: category + 1,
                clue,
            },
            Direction::Up => Self {
                category,
                clue: clue.saturating_sub(1),
            },
            Direction::Down if clue + 1 < rows => Self {
                category,
                clue: clue + 1,
            },
            // Edge of the grid
            _ => self,
        }
    }
}
