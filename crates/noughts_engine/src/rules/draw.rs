//! Full-board detection.

use crate::types::{CELL_COUNT, Mark};

/// Checks if every cell is occupied.
///
/// A full board with no completed line is a draw.
pub fn is_full(cells: &[Mark; CELL_COUNT]) -> bool {
    cells.iter().all(|m| m.is_player_mark())
}
