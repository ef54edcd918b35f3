//! A single game: the board plus the moves that produced it.

use crate::board::{Board, Placement};
use crate::types::{Coordinate, Mark, Move, Outcome};
use serde::Serialize;
use tracing::instrument;

/// One game of a match.
///
/// Wraps the [`Board`] and records each successful placement so the
/// renderer can show the move order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Assembles a game from existing parts without validation.
    ///
    /// Intended for diagnostics and invariant checks on arbitrary states.
    pub fn from_parts(board: Board, history: Vec<Move>) -> Self {
        Self { board, history }
    }

    /// Clears the board and history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
    }

    /// Places a mark through [`Board::place`], recording it on success.
    pub fn place(&mut self, mark: Mark, coord: Coordinate) -> Placement {
        let placement = self.board.place(mark, coord);
        if placement.is_placed() {
            self.history.push(Move::new(mark, coord));
        }
        placement
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Placements in the order they were made.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Most recent placement.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
