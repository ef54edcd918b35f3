//! Engine error types.

use crate::types::{Coordinate, Mark, Outcome};
use derive_more::{Display, Error};
use tracing::instrument;

/// Specific failure raised by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Row or column outside the 3x3 grid.
    #[display("Coordinate ({}, {}) is outside the 3x3 grid", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A mark that cannot be assigned to a player or written to a cell.
    #[display("Illegal mark {:?}: only X or O may be used", _0)]
    IllegalMark(Mark),

    /// The board has no empty cell to move into.
    #[display("No legal move available")]
    NoLegalMove,

    /// The move slot was read before a move was computed.
    #[display("No move has been computed")]
    NoMoveComputed,

    /// Strict placement onto an occupied cell.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// Strict placement after the game has ended.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> EngineErrorKind {
        self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}
