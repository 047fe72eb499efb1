//! Stateless UI rendering for the trivia board.

use jeopardy::{BoardSnapshot, CellView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use super::input::Cursor;

/// Splits the screen into title, board and status areas.
fn screen_chunks(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Status
        ])
        .areas(area)
}

/// Header and cell areas for every column of the grid.
fn grid_areas(area: Rect, snapshot: &BoardSnapshot) -> Vec<(Rect, Vec<Rect>)> {
    let columns = snapshot.columns();
    if columns.is_empty() {
        return Vec::new();
    }

    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, columns.len() as u32); columns.len()])
        .split(area);

    let rows = snapshot.row_count();
    column_areas
        .iter()
        .map(|column_area| {
            let mut constraints = vec![Constraint::Length(4)]; // Header
            constraints.extend(std::iter::repeat_n(Constraint::Fill(1), rows));
            let areas = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(*column_area);
            (areas[0], areas[1..].to_vec())
        })
        .collect()
}

/// Finds the grid cell under a screen position.
pub fn cell_at(screen: Rect, snapshot: &BoardSnapshot, x: u16, y: u16) -> Option<Cursor> {
    let [_, board_area, _] = screen_chunks(screen);
    let position = Position::new(x, y);
    grid_areas(board_area, snapshot)
        .into_iter()
        .enumerate()
        .find_map(|(category, (_, cells))| {
            cells
                .iter()
                .position(|cell| cell.contains(position))
                .map(|clue| Cursor { category, clue })
        })
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area] = screen_chunks(frame.area());

    let title = Paragraph::new("Jeopardy!")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    if app.is_loading() {
        draw_loading(frame, board_area);
    } else {
        draw_board(frame, board_area, app.snapshot(), app.cursor());
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Fetching clues...")
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &BoardSnapshot, cursor: Cursor) {
    let grid = grid_areas(area, snapshot);
    for (index, (column, (header_area, cell_areas))) in
        snapshot.columns().iter().zip(grid).enumerate()
    {
        let header = Paragraph::new(column.title().to_uppercase())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, header_area);

        for (row, (cell, cell_area)) in column.cells().iter().zip(cell_areas).enumerate() {
            let selected = cursor.category == index && cursor.clue == row;
            draw_cell(frame, cell_area, cell, selected);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, selected: bool) {
    let base_style = match cell {
        CellView::Hidden => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        CellView::Question(_) => Style::default().fg(Color::White),
        CellView::Answer(_) => Style::default().fg(Color::Green),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(cell.text())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Blue)));
    frame.render_widget(paragraph, area);
}
