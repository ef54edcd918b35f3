//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_engine::Coordinate;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Coordinate::new(r, c).ok())
        .unwrap_or(cursor)
}
