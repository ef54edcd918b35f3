//! Win detection by line sums.

use crate::types::{CELL_COUNT, Mark};

/// The eight winning lines as row-major indices, in scan order:
/// rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Sum of mark weights along one line.
pub fn line_sum(cells: &[Mark; CELL_COUNT], line: &[usize; 3]) -> i32 {
    line.iter().map(|&i| cells[i].weight()).sum()
}

/// Returns the mark owning the first complete line in scan order.
///
/// A sum of +3 means X holds all three cells, -3 means O does. On a
/// corrupted board with several complete lines the first one wins.
pub fn winning_mark(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    LINES.iter().find_map(|line| match line_sum(cells, line) {
        3 => Some(Mark::X),
        -3 => Some(Mark::O),
        _ => None,
    })
}
