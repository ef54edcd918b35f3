//! Game rules for tic-tac-toe.
//!
//! Pure functions over the nine cells of a board. Rules are kept apart
//! from board storage so the search engine can evaluate scratch positions
//! with exactly the same logic the live board uses.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, line_sum, winning_mark};

use crate::types::{CELL_COUNT, Mark, Outcome};

/// Derives the outcome of a position.
///
/// A completed line takes precedence over a full board.
pub fn evaluate(cells: &[Mark; CELL_COUNT]) -> Outcome {
    if let Some(outcome) = winning_mark(cells).and_then(Outcome::win_for) {
        return outcome;
    }
    if is_full(cells) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(layout: &str) -> [Mark; CELL_COUNT] {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, ch) in layout.chars().enumerate() {
            cells[i] = ch.to_string().parse().unwrap();
        }
        cells
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&[Mark::Empty; CELL_COUNT]), Outcome::Ongoing);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X completes the last row with the final move.
        assert_eq!(evaluate(&cells("OXOXOXXXX")), Outcome::XWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&cells("XOXOXOOXO")), Outcome::Draw);
    }
}
