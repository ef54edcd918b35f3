//! Mark balance: X and O counts never drift apart by more than one.

use super::Invariant;
use crate::{Game, Mark};

/// Invariant: the number of X and O marks differs by at most one.
///
/// Either side may open, so the sign of the difference is free.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Mark::X);
        let o_count = game.board().count(Mark::O);
        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}
