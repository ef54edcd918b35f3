//! Move selection for the computer player.
//!
//! Two modes are available. [`SearchMode::Random`] picks uniformly among
//! empty cells. [`SearchMode::Optimal`] runs an exhaustive minimax over
//! the remaining game tree, scoring a win for the searching side as
//! `10 - depth` and a loss as `depth - 10`. Faster wins and slower losses
//! are therefore preferred.
//!
//! The chosen move is stored in a single slot that must be read back with
//! [`SearchEngine::take_move`].

use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind};
use crate::rules;
use crate::types::{CELL_COUNT, Coordinate, Mark, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score magnitude of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// How the computer chooses its move.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchMode {
    /// Uniformly random empty cell.
    Random,
    /// Exhaustive minimax.
    #[default]
    Optimal,
}

/// Computes moves for the computer player.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    mode: SearchMode,
    rng: StdRng,
    last_move: Option<Coordinate>,
}

impl SearchEngine {
    /// Creates an engine seeded from the operating system.
    #[instrument]
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            rng: StdRng::from_os_rng(),
            last_move: None,
        }
    }

    /// Creates an engine with a reproducible random sequence.
    #[instrument]
    pub fn with_seed(mode: SearchMode, seed: u64) -> Self {
        Self {
            mode,
            rng: StdRng::seed_from_u64(seed),
            last_move: None,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Switches mode for subsequent searches.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Computes a move for `mark` and stores it in the move slot.
    ///
    /// The board is only read; search runs on a scratch copy of the cells.
    ///
    /// # Errors
    ///
    /// - `IllegalMark` if `mark` is Empty
    /// - `NoLegalMove` if the board has no empty cell
    #[instrument(skip(self, board), fields(mode = %self.mode))]
    pub fn compute(&mut self, board: &Board, mark: Mark) -> Result<(), EngineError> {
        if !mark.is_player_mark() {
            return Err(EngineError::new(EngineErrorKind::IllegalMark(mark)));
        }
        let candidates = legal_moves(board)?;

        let chosen = match self.mode {
            SearchMode::Random => *candidates
                .choose(&mut self.rng)
                .ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))?,
            SearchMode::Optimal => {
                let (coord, value) = best_move(board, mark)?;
                debug!(%coord, value, "Minimax selected move");
                coord
            }
        };

        debug!(%mark, coord = %chosen, "Computed move");
        self.last_move = Some(chosen);
        Ok(())
    }

    /// Reads and clears the move slot.
    ///
    /// # Errors
    ///
    /// Returns `NoMoveComputed` if nothing has been computed since the
    /// last read.
    #[track_caller]
    pub fn take_move(&mut self) -> Result<Coordinate, EngineError> {
        self.last_move
            .take()
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoMoveComputed))
    }

    /// Computes and immediately reads a move.
    pub fn next_move(&mut self, board: &Board, mark: Mark) -> Result<Coordinate, EngineError> {
        self.compute(board, mark)?;
        self.take_move()
    }

    /// Minimax value of every legal move for `mark`, in row-major order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SearchEngine::compute`].
    #[instrument(skip(board))]
    pub fn evaluate_moves(board: &Board, mark: Mark) -> Result<Vec<(Coordinate, i32)>, EngineError> {
        if !mark.is_player_mark() {
            return Err(EngineError::new(EngineErrorKind::IllegalMark(mark)));
        }
        let candidates = legal_moves(board)?;
        let mut cells = *board.cells();

        Ok(candidates
            .into_iter()
            .map(|coord| (coord, score_candidate(&mut cells, coord, mark)))
            .collect())
    }
}

fn legal_moves(board: &Board) -> Result<Vec<Coordinate>, EngineError> {
    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return Err(EngineError::new(EngineErrorKind::NoLegalMove));
    }
    Ok(candidates)
}

/// Picks the first move (row-major) with the strictly greatest value.
fn best_move(board: &Board, mark: Mark) -> Result<(Coordinate, i32), EngineError> {
    let mut cells = *board.cells();
    let mut best: Option<(Coordinate, i32)> = None;

    for coord in legal_moves(board)? {
        let value = score_candidate(&mut cells, coord, mark);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((coord, value));
        }
    }

    best.ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))
}

/// Places `mark` hypothetically, scores the reply tree, and undoes the move.
fn score_candidate(cells: &mut [Mark; CELL_COUNT], coord: Coordinate, mark: Mark) -> i32 {
    let index = coord.index();
    cells[index] = mark;
    let value = minimax(cells, 0, false, mark);
    cells[index] = Mark::Empty;
    value
}

/// Value of a position from the perspective of `me`.
///
/// `maximizing` is true when `me` is the side to move.
fn minimax(cells: &mut [Mark; CELL_COUNT], depth: i32, maximizing: bool, me: Mark) -> i32 {
    match rules::evaluate(cells) {
        Outcome::Ongoing => {}
        Outcome::Draw => return 0,
        decided => {
            return if decided.winner() == Some(me) {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
    }

    let mover = if maximizing { me } else { me.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if cells[index] != Mark::Empty {
            continue;
        }
        cells[index] = mover;
        let value = minimax(cells, depth + 1, !maximizing, me);
        cells[index] = Mark::Empty;

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, ch) in layout.chars().enumerate() {
            cells[i] = ch.to_string().parse().unwrap();
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_take_before_compute_fails() {
        let mut engine = SearchEngine::with_seed(SearchMode::Optimal, 1);
        let err = engine.take_move().unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::NoMoveComputed);
    }

    #[test]
    fn test_move_slot_is_read_once() {
        let mut engine = SearchEngine::with_seed(SearchMode::Random, 7);
        engine.compute(&Board::new(), Mark::O).unwrap();
        assert!(engine.take_move().is_ok());
        assert_eq!(
            engine.take_move().unwrap_err().kind(),
            EngineErrorKind::NoMoveComputed
        );
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let full = board("XOXOXOOXO");
        for mode in [SearchMode::Random, SearchMode::Optimal] {
            let mut engine = SearchEngine::with_seed(mode, 3);
            let err = engine.compute(&full, Mark::X).unwrap_err();
            assert_eq!(err.kind(), EngineErrorKind::NoLegalMove);
        }
    }

    #[test]
    fn test_decided_board_with_empty_cells_still_yields_move() {
        // X has already completed the top row.
        let decided = board("XXXOO....");
        assert!(decided.outcome().is_terminal());
        for mode in [SearchMode::Random, SearchMode::Optimal] {
            let mut engine = SearchEngine::with_seed(mode, 5);
            let coord = engine.next_move(&decided, Mark::O).unwrap();
            assert!(decided.is_empty(coord));
        }
    }

    #[test]
    fn test_compute_does_not_touch_board() {
        let live = board("X...O....");
        let snapshot = live.clone();
        let mut engine = SearchEngine::with_seed(SearchMode::Optimal, 0);
        engine.compute(&live, Mark::X).unwrap();
        assert_eq!(live, snapshot);
    }

    #[test]
    fn test_random_mode_picks_empty_cell() {
        let live = board("XOXOXO.X.");
        let mut engine = SearchEngine::with_seed(SearchMode::Random, 42);
        for _ in 0..20 {
            let coord = engine.next_move(&live, Mark::O).unwrap();
            assert!(live.is_empty(coord));
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move can complete the middle column at (2, 1).
        let live = board("XOX.O.X..");
        let mut engine = SearchEngine::with_seed(SearchMode::Optimal, 0);
        let coord = engine.next_move(&live, Mark::O).unwrap();
        assert_eq!(coord, Coordinate::new(2, 1).unwrap());
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X threatens the top row; O must take (0, 2).
        let live = board("XX..O....");
        let mut engine = SearchEngine::with_seed(SearchMode::Optimal, 0);
        let coord = engine.next_move(&live, Mark::O).unwrap();
        assert_eq!(coord, Coordinate::new(0, 2).unwrap());
    }

    #[test]
    fn test_immediate_win_scores_highest() {
        let live = board("XOX.O.X..");
        let scores = SearchEngine::evaluate_moves(&live, Mark::O).unwrap();
        let win = scores
            .iter()
            .find(|(c, _)| *c == Coordinate::new(2, 1).unwrap())
            .unwrap();
        assert_eq!(win.1, WIN_SCORE);
        assert!(scores.iter().all(|(_, v)| *v <= WIN_SCORE));
    }

    #[test]
    fn test_mode_parses_from_config_text() {
        assert_eq!("optimal".parse::<SearchMode>().unwrap(), SearchMode::Optimal);
        assert_eq!("Random".parse::<SearchMode>().unwrap(), SearchMode::Random);
        assert_eq!(SearchMode::Optimal.to_string(), "optimal");
    }
}
