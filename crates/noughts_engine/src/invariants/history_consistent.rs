//! History consistency: the move list explains the board exactly.

use super::Invariant;
use crate::{Game, Mark};

/// Invariant: every occupied cell has exactly one history entry that
/// wrote the same mark there.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let occupied = board.cells().iter().filter(|m| **m != Mark::Empty).count();

        occupied == game.history().len()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.coordinate) == mv.mark)
    }

    fn description() -> &'static str {
        "History matches the marks on the board"
    }
}
