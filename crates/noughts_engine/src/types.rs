//! Core value types: marks, coordinates, outcomes and moves.

use crate::error::{EngineError, EngineErrorKind};
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single cell.
///
/// Each mark carries a numeric weight (X = +1, O = -1, Empty = 0) so that
/// a completed line sums to +3 or -3.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    #[strum(to_string = ".", serialize = " ", serialize = "_")]
    Empty,
    /// Cross.
    #[strum(to_string = "X", serialize = "x")]
    X,
    /// Nought.
    #[strum(to_string = "O", serialize = "o")]
    O,
}

impl Mark {
    /// Numeric weight used for line sums.
    pub fn weight(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        }
    }

    /// Returns the opposing mark. Empty has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for X and O.
    pub fn is_player_mark(self) -> bool {
        !matches!(self, Mark::Empty)
    }
}

/// A validated cell position. Both components are in `0..3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// All nine cells in row-major scan order.
    pub const ALL: [Coordinate; CELL_COUNT] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// The center cell.
    pub const CENTER: Coordinate = Coordinate { row: 1, col: 1 };

    /// Creates a coordinate, rejecting anything outside the grid.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::new(EngineErrorKind::OutOfRange { row, col }));
        }
        Ok(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[track_caller]
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = EngineError;

    #[track_caller]
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

/// Result of evaluating a board.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    #[default]
    Ongoing,
    /// X completed a line.
    #[strum(to_string = "X wins")]
    XWins,
    /// O completed a line.
    #[strum(to_string = "O wins")]
    OWins,
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Outcome reported when `mark` completes a line.
    pub fn win_for(mark: Mark) -> Option<Self> {
        match mark {
            Mark::X => Some(Outcome::XWins),
            Mark::O => Some(Outcome::OWins),
            Mark::Empty => None,
        }
    }

    /// Returns the winning mark if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// True once the game can accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// A placed mark, as recorded in a game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, new)]
#[display("{mark} -> {coordinate}")]
pub struct Move {
    /// The mark written.
    pub mark: Mark,
    /// Where it was written.
    pub coordinate: Coordinate,
}
