//! The 3x3 board: sole owner of cell contents and the derived outcome.

use crate::error::{EngineError, EngineErrorKind};
use crate::rules;
use crate::types::{BOARD_SIZE, CELL_COUNT, Coordinate, Mark, Outcome};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Whether a call to [`Board::place`] changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was written.
    Placed,
    /// The call was rejected and the board is unchanged.
    Ignored,
}

impl Placement {
    /// True if the board changed.
    pub fn is_placed(self) -> bool {
        matches!(self, Placement::Placed)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board knows nothing about players. It accepts marks, refuses to
/// overwrite occupied cells, and caches the outcome after every placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Mark; CELL_COUNT],
    /// Outcome as of the last successful placement.
    outcome: Outcome,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            outcome: Outcome::Ongoing,
        }
    }

    /// Builds a board from arbitrary cell contents.
    ///
    /// The contents need not be reachable by legal play. The outcome is
    /// evaluated immediately.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self {
            outcome: rules::evaluate(&cells),
            cells,
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
        self.outcome = Outcome::Ongoing;
        debug!("Board reset");
    }

    /// Returns the mark at `coord`.
    pub fn get(&self, coord: Coordinate) -> Mark {
        self.cells[coord.index()]
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord) == Mark::Empty
    }

    /// Checks a cell by raw row and column.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either component is outside `0..3`.
    #[track_caller]
    pub fn is_empty_at(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        Ok(self.is_empty(Coordinate::new(row, col)?))
    }

    /// Writes `mark` at `coord` if the move is legal, otherwise does nothing.
    ///
    /// A move is legal when the cell is empty, the game is still ongoing,
    /// and `mark` is X or O. The outcome is recomputed after a placement.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn place(&mut self, mark: Mark, coord: Coordinate) -> Placement {
        match self.try_place(mark, coord) {
            Ok(()) => Placement::Placed,
            Err(e) => {
                debug!(reason = %e.kind(), "Placement ignored");
                Placement::Ignored
            }
        }
    }

    /// Strict form of [`Board::place`].
    ///
    /// # Errors
    ///
    /// - `IllegalMark` if `mark` is Empty
    /// - `GameOver` if the outcome is already decided
    /// - `CellOccupied` if the cell holds a mark
    ///
    /// The board is unchanged on error.
    #[track_caller]
    pub fn try_place(&mut self, mark: Mark, coord: Coordinate) -> Result<(), EngineError> {
        if !mark.is_player_mark() {
            return Err(EngineError::new(EngineErrorKind::IllegalMark(mark)));
        }
        if self.outcome.is_terminal() {
            return Err(EngineError::new(EngineErrorKind::GameOver(self.outcome)));
        }
        if !self.is_empty(coord) {
            return Err(EngineError::new(EngineErrorKind::CellOccupied(coord)));
        }

        self.cells[coord.index()] = mark;
        self.outcome = rules::evaluate(&self.cells);
        info!(%mark, %coord, outcome = ?self.outcome, "Mark placed");
        Ok(())
    }

    /// Current outcome, recomputed after every successful placement.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .iter()
            .copied()
            .filter(|&c| self.is_empty(c))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let index = row * BOARD_SIZE + col;
                let symbol = match self.cells[index] {
                    Mark::Empty => (index + 1).to_string(),
                    mark => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board_is_empty_and_ongoing() {
        let board = Board::new();
        assert!(Coordinate::ALL.iter().all(|&c| board.is_empty(c)));
        assert_eq!(board.outcome(), Outcome::Ongoing);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_writes_mark() {
        let mut board = Board::new();
        assert_eq!(board.place(Mark::X, Coordinate::CENTER), Placement::Placed);
        assert_eq!(board.get(Coordinate::CENTER), Mark::X);
        assert!(!board.is_empty(Coordinate::CENTER));
    }

    #[test]
    fn test_place_on_occupied_cell_is_ignored() {
        let mut board = Board::new();
        board.place(Mark::X, at(0, 0));
        let before = board.clone();
        assert_eq!(board.place(Mark::O, at(0, 0)), Placement::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_empty_mark_is_ignored() {
        let mut board = Board::new();
        assert_eq!(board.place(Mark::Empty, at(1, 2)), Placement::Ignored);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_after_win_is_ignored() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(Mark::O, at(0, col));
        }
        assert_eq!(board.outcome(), Outcome::OWins);
        let before = board.clone();
        assert_eq!(board.place(Mark::X, at(2, 2)), Placement::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_place_reports_reason() {
        let mut board = Board::new();
        board.try_place(Mark::X, at(0, 0)).unwrap();
        let err = board.try_place(Mark::O, at(0, 0)).unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::CellOccupied(at(0, 0)));

        let err = board.try_place(Mark::Empty, at(1, 1)).unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::IllegalMark(Mark::Empty));
    }

    #[test]
    fn test_is_empty_at_out_of_range() {
        let board = Board::new();
        assert!(board.is_empty_at(1, 1).unwrap());
        let err = board.is_empty_at(0, 3).unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::OutOfRange { row: 0, col: 3 });
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::new();
        board.place(Mark::X, at(2, 1));
        board.reset();
        assert_eq!(board, Board::new());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.place(Mark::X, at(0, 0));
        board.place(Mark::O, at(1, 1));
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[0], at(0, 1));
        assert_eq!(empty[6], at(2, 2));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(Mark::X, at(0, 0));
        board.place(Mark::O, at(2, 2));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
