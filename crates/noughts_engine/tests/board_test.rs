//! Tests for board placement and outcome detection.

use noughts_engine::{Board, Coordinate, EngineErrorKind, Mark, Outcome, Placement, rules};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).expect("valid coordinate")
}

#[test]
fn test_top_row_win_for_x() {
    let mut board = Board::new();
    board.place(Mark::X, at(0, 0));
    board.place(Mark::O, at(1, 0));
    board.place(Mark::X, at(0, 1));
    board.place(Mark::O, at(2, 2));
    assert_eq!(board.outcome(), Outcome::Ongoing);

    board.place(Mark::X, at(0, 2));
    assert_eq!(board.outcome(), Outcome::XWins);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X O / O X O
    let layout = [
        (Mark::X, at(0, 0)),
        (Mark::O, at(0, 1)),
        (Mark::X, at(0, 2)),
        (Mark::O, at(1, 0)),
        (Mark::X, at(1, 1)),
        (Mark::O, at(1, 2)),
        (Mark::O, at(2, 0)),
        (Mark::X, at(2, 1)),
        (Mark::O, at(2, 2)),
    ];
    let mut board = Board::new();
    for (mark, coord) in layout {
        assert_eq!(board.place(mark, coord), Placement::Placed);
    }
    assert!(board.is_full());
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_reset_then_alternating_fill_is_draw() {
    let mut board = Board::new();
    board.place(Mark::O, at(1, 1));
    board.reset();

    // Alternating X/O, every cell filled, no line completed.
    let order = [
        at(0, 0),
        at(1, 1),
        at(0, 2),
        at(0, 1),
        at(2, 1),
        at(1, 0),
        at(1, 2),
        at(2, 2),
        at(2, 0),
    ];
    let mut mark = Mark::X;
    for coord in order {
        assert_eq!(board.outcome(), Outcome::Ongoing);
        assert_eq!(board.place(mark, coord), Placement::Placed);
        mark = mark.opponent();
    }
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_illegal_placements_never_change_contents() {
    let mut board = Board::new();
    board.place(Mark::X, at(0, 0));
    board.place(Mark::X, at(1, 1));
    board.place(Mark::X, at(2, 2));
    assert_eq!(board.outcome(), Outcome::XWins);

    let snapshot = board.clone();
    for coord in Coordinate::ALL {
        assert_eq!(board.place(Mark::O, coord), Placement::Ignored);
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_strict_placement_on_finished_game() {
    let mut board = Board::new();
    for row in 0..3 {
        board.place(Mark::O, at(row, 2));
    }
    let err = board.try_place(Mark::X, at(0, 0)).unwrap_err();
    assert_eq!(err.kind(), EngineErrorKind::GameOver(Outcome::OWins));
}

#[test]
fn test_out_of_range_is_surfaced() {
    let board = Board::new();
    let err = board.is_empty_at(5, 5).unwrap_err();
    assert_eq!(err.kind(), EngineErrorKind::OutOfRange { row: 5, col: 5 });
    assert!(Coordinate::try_from((3, 0)).is_err());
}

/// Walks every reachable position and checks the cached outcome against
/// an independent reading of the board.
fn walk(board: &Board, to_move: Mark, visited: &mut usize) {
    *visited += 1;

    let cells = board.cells();
    let any_line = rules::LINES
        .iter()
        .any(|line| rules::line_sum(cells, line).abs() == 3);

    match board.outcome() {
        Outcome::Ongoing => assert!(!any_line && !board.is_full()),
        Outcome::Draw => assert!(!any_line && board.is_full()),
        Outcome::XWins | Outcome::OWins => assert!(any_line),
    }

    if board.outcome().is_terminal() {
        return;
    }
    for coord in board.empty_cells() {
        let mut next = board.clone();
        assert_eq!(next.place(to_move, coord), Placement::Placed);
        walk(&next, to_move.opponent(), visited);
    }
}

#[test]
fn test_outcome_consistent_over_all_reachable_boards() {
    let mut visited = 0;
    walk(&Board::new(), Mark::X, &mut visited);
    // Nodes in the full tic-tac-toe game tree, root included.
    assert_eq!(visited, 549_946);
}
