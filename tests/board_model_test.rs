//! Tests for the reveal state machine and masked snapshots.

use jeopardy::{
    Board, BoardError, BoardModel, Category, CellView, Clue, HIDDEN_MARKER, RenderInstruction,
    RevealState,
};

fn board(columns: usize, rows: usize) -> Board {
    Board::new(
        (0..columns)
            .map(|c| {
                Category::new(
                    format!("Category {c}"),
                    (0..rows)
                        .map(|r| Clue::new(format!("question {c}.{r}"), format!("answer {c}.{r}")))
                        .collect(),
                )
            })
            .collect(),
    )
}

fn state(model: &BoardModel, category: usize, clue: usize) -> RevealState {
    model
        .board()
        .clue(category, clue)
        .expect("Clue missing")
        .reveal_state()
}

#[test]
fn test_reveal_walks_question_then_answer_then_stops() {
    let mut model = BoardModel::new(Board::new(vec![Category::new(
        "Math",
        vec![Clue::new("2+2", "4")],
    )]));
    assert_eq!(state(&model, 0, 0), RevealState::Hidden);

    let first = model.reveal(0, 0).expect("Reveal failed");
    assert_eq!(first, RenderInstruction::Display("2+2".to_string()));
    assert_eq!(state(&model, 0, 0), RevealState::QuestionShown);

    let second = model.reveal(0, 0).expect("Reveal failed");
    assert_eq!(second, RenderInstruction::Display("4".to_string()));
    assert_eq!(state(&model, 0, 0), RevealState::AnswerShown);

    let third = model.reveal(0, 0).expect("Reveal failed");
    assert_eq!(third, RenderInstruction::NoChange);
    assert_eq!(state(&model, 0, 0), RevealState::AnswerShown);
}

#[test]
fn test_reveal_only_touches_target_clue() {
    let mut model = BoardModel::new(board(6, 5));
    model.reveal(2, 3).expect("Reveal failed");

    for category in 0..6 {
        for clue in 0..5 {
            let expected = if (category, clue) == (2, 3) {
                RevealState::QuestionShown
            } else {
                RevealState::Hidden
            };
            assert_eq!(state(&model, category, clue), expected);
        }
    }
}

#[test]
fn test_same_titles_are_separate_columns() {
    let mut model = BoardModel::new(Board::new(vec![
        Category::new("Potpourri", vec![Clue::new("a", "1")]),
        Category::new("Potpourri", vec![Clue::new("a", "1")]),
    ]));
    model.reveal(1, 0).expect("Reveal failed");
    assert_eq!(state(&model, 0, 0), RevealState::Hidden);
    assert_eq!(state(&model, 1, 0), RevealState::QuestionShown);
}

#[test]
fn test_out_of_range_reveal_fails_for_any_size() {
    for (columns, rows) in [(0, 0), (1, 1), (6, 5), (3, 9)] {
        let mut model = BoardModel::new(board(columns, rows));
        for (category, clue) in [(columns, 0), (0, rows), (columns + 4, rows + 4), (usize::MAX, 0)] {
            assert_eq!(
                model.reveal(category, clue),
                Err(BoardError::IndexOutOfRange { category, clue }),
                "({category}, {clue}) on {columns}x{rows}"
            );
        }
    }
}

#[test]
fn test_failed_reveal_changes_nothing() {
    let mut model = BoardModel::new(board(2, 2));
    let before = model.clone();
    let _ = model.reveal(5, 5);
    assert_eq!(model, before);
}

#[test]
fn test_snapshot_masks_hidden_clues() {
    let mut model = BoardModel::new(board(6, 5));
    model.reveal(0, 0).expect("Reveal failed");
    model.reveal(1, 1).expect("Reveal failed");
    model.reveal(1, 1).expect("Reveal failed");

    let snapshot = model.render_snapshot();
    assert_eq!(snapshot.columns().len(), 6);
    assert_eq!(snapshot.row_count(), 5);

    assert_eq!(
        snapshot.cell(0, 0),
        Some(&CellView::Question("question 0.0".to_string()))
    );
    assert_eq!(
        snapshot.cell(1, 1),
        Some(&CellView::Answer("answer 1.1".to_string()))
    );

    let json = serde_json::to_string(&snapshot).expect("Serialize failed");
    for category in 0..6 {
        for clue in 0..5 {
            if matches!((category, clue), (0, 0) | (1, 1)) {
                continue;
            }
            assert_eq!(snapshot.cell(category, clue), Some(&CellView::Hidden));
            assert_eq!(
                snapshot.cell(category, clue).map(CellView::text),
                Some(HIDDEN_MARKER)
            );
            assert!(!json.contains(&format!("question {category}.{clue}")));
            assert!(!json.contains(&format!("answer {category}.{clue}")));
        }
    }
}

#[test]
fn test_snapshot_keeps_titles_in_order() {
    let model = BoardModel::new(board(3, 1));
    let snapshot = model.render_snapshot();
    let titles: Vec<&str> = snapshot
        .columns()
        .iter()
        .map(|c| c.title().as_str())
        .collect();
    assert_eq!(titles, ["Category 0", "Category 1", "Category 2"]);
}

#[test]
fn test_full_size_board_shape() {
    assert!(board(6, 5).is_full_size());
    assert!(!board(5, 5).is_full_size());
    assert!(!board(6, 4).is_full_size());
}
