//! Match controller: turn order, scoring and the computer's replies.
//!
//! The controller composes a [`Game`] and a [`SearchEngine`] and owns both
//! player records. It never renders; callers poll its query methods after
//! each command returns.

use crate::board::{Board, Placement};
use crate::error::EngineError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::player::{Player, PlayerKind};
use crate::search::{SearchEngine, SearchMode};
use crate::types::{Coordinate, Mark, Move, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Engine-level settings for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Name shown for the human player.
    pub human_name: String,
    /// Name shown for the computer player.
    pub computer_name: String,
    /// Mark played by the human; the computer takes the other one.
    pub human_mark: Mark,
    /// How the computer picks its moves.
    pub search_mode: SearchMode,
    /// Seed for every random choice, for reproducible matches.
    pub seed: Option<u64>,
    /// Play the computer's reply inside the command that handed it the turn.
    ///
    /// When false the turn stays with the computer until the caller invokes
    /// [`MatchController::apply_computer_move`].
    pub auto_reply: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            human_name: "Player".to_string(),
            computer_name: "Computer".to_string(),
            human_mark: Mark::X,
            search_mode: SearchMode::Optimal,
            seed: None,
            auto_reply: true,
        }
    }
}

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The human player moves next.
    Human,
    /// The computer moves next.
    Computer,
}

impl Turn {
    /// The other side.
    pub fn flip(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

/// Lifecycle of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board is empty and nobody has moved yet.
    AwaitingFirstTurn,
    /// At least one mark placed, no result yet.
    Ongoing,
    /// Game decided.
    Finished(Outcome),
}

/// Drives a match of many games between a human and the computer.
#[derive(Debug, Clone)]
pub struct MatchController {
    game: Game,
    search: SearchEngine,
    human: Player,
    computer: Player,
    turn: Turn,
    rng: StdRng,
    auto_reply: bool,
    games_played: u32,
    draws: u32,
}

impl MatchController {
    /// Creates a controller and starts the first game.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMark` if `settings.human_mark` is Empty.
    #[instrument(skip(settings), fields(human = %settings.human_name, mode = %settings.search_mode))]
    pub fn new(settings: MatchSettings) -> Result<Self, EngineError> {
        let human = Player::new(&settings.human_name, settings.human_mark, PlayerKind::Human)?;
        let computer = Player::new(
            &settings.computer_name,
            settings.human_mark.opponent(),
            PlayerKind::Computer,
        )?;

        let (rng, search) = match settings.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                SearchEngine::with_seed(settings.search_mode, seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), SearchEngine::new(settings.search_mode)),
        };

        let mut controller = Self {
            game: Game::new(),
            search,
            human,
            computer,
            turn: Turn::Human,
            rng,
            auto_reply: settings.auto_reply,
            games_played: 0,
            draws: 0,
        };
        controller.start_new_match(&settings.human_name, &settings.computer_name)?;
        Ok(controller)
    }

    /// Renames both players, clears scores and starts a fresh game.
    #[instrument(skip(self))]
    pub fn start_new_match(
        &mut self,
        player_name: &str,
        computer_name: &str,
    ) -> Result<(), EngineError> {
        self.human.set_name(player_name);
        self.computer.set_name(computer_name);
        self.human.reset_score();
        self.computer.reset_score();
        self.games_played = 0;
        self.draws = 0;
        info!("New match");
        self.start_new_game()
    }

    /// Clears the board and picks the opening side at random.
    ///
    /// Scores carry over. If the computer opens and auto-reply is on, its
    /// move is played before returning.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) -> Result<(), EngineError> {
        let first = if self.rng.random_bool(0.5) {
            Turn::Human
        } else {
            Turn::Computer
        };
        self.start_new_game_with(first)
    }

    /// Like [`MatchController::start_new_game`] with a chosen opening side.
    #[instrument(skip(self))]
    pub fn start_new_game_with(&mut self, first: Turn) -> Result<(), EngineError> {
        self.game.reset();
        self.turn = first;
        info!(?first, "New game");

        if self.turn == Turn::Computer && self.auto_reply {
            self.apply_computer_move()?;
        }
        Ok(())
    }

    /// Places the human's mark at `coord`.
    ///
    /// Ignored when it is not the human's turn, the cell is taken, or the
    /// game is over. On success the turn passes to the computer, which
    /// replies immediately if auto-reply is on.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn submit_human_move(&mut self, coord: Coordinate) -> Result<Placement, EngineError> {
        if self.turn != Turn::Human {
            debug!("Human move outside the human's turn");
            return Ok(Placement::Ignored);
        }

        let placement = self.game.place(*self.human.mark(), coord);
        if !placement.is_placed() {
            return Ok(placement);
        }
        self.after_placement();

        if self.awaiting_computer() && self.auto_reply {
            self.apply_computer_move()?;
        }
        Ok(placement)
    }

    /// Asks the search engine for a move and plays it.
    ///
    /// Returns the coordinate played, or `None` when it is not the
    /// computer's turn or the game is over.
    #[instrument(skip(self), fields(mode = %self.search.mode()))]
    pub fn apply_computer_move(&mut self) -> Result<Option<Coordinate>, EngineError> {
        if !self.awaiting_computer() {
            debug!(turn = ?self.turn, outcome = ?self.outcome(), "No computer move due");
            return Ok(None);
        }

        let mark = *self.computer.mark();
        self.search.compute(self.game.board(), mark)?;
        let coord = self.search.take_move()?;

        if !self.game.place(mark, coord).is_placed() {
            return Ok(None);
        }
        self.after_placement();
        Ok(Some(coord))
    }

    /// Scores a decided game or hands the turn over.
    fn after_placement(&mut self) {
        debug_assert!(
            GameInvariants::check_all(&self.game).is_ok(),
            "Game invariants violated"
        );

        match self.game.outcome() {
            Outcome::Ongoing => {
                self.turn = self.turn.flip();
            }
            Outcome::Draw => {
                self.games_played += 1;
                self.draws += 1;
                info!(games_played = self.games_played, "Game drawn");
            }
            decided => {
                self.games_played += 1;
                if let Some(winner) = decided.winner() {
                    info!(%winner, "Game won");
                    if *self.human.mark() == winner {
                        self.human.increment_score();
                    } else {
                        self.computer.increment_score();
                    }
                }
            }
        }
    }

    /// True when the computer should move next.
    pub fn awaiting_computer(&self) -> bool {
        self.turn == Turn::Computer && !self.outcome().is_terminal()
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// The current game, including its move history.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Moves of the current game in order.
    pub fn history(&self) -> &[Move] {
        self.game.history()
    }

    /// Outcome of the current game.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// Lifecycle phase of the current game.
    pub fn phase(&self) -> GamePhase {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            GamePhase::Finished(outcome)
        } else if self.game.history().is_empty() {
            GamePhase::AwaitingFirstTurn
        } else {
            GamePhase::Ongoing
        }
    }

    /// Side to move. After a decided game this is the side that moved last.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Player record for the side to move.
    pub fn current_player(&self) -> &Player {
        match self.turn {
            Turn::Human => &self.human,
            Turn::Computer => &self.computer,
        }
    }

    /// The human player's record.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// The computer player's record.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Player holding `mark`, if any.
    pub fn player_for(&self, mark: Mark) -> Option<&Player> {
        [&self.human, &self.computer]
            .into_iter()
            .find(|p| *p.mark() == mark)
    }

    /// Decided games in this match.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Drawn games in this match.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// The computer's search mode.
    pub fn search_mode(&self) -> SearchMode {
        self.search.mode()
    }

    /// Changes the computer's search mode from the next move on.
    pub fn set_search_mode(&mut self, mode: SearchMode) {
        info!(%mode, "Search mode changed");
        self.search.set_mode(mode);
    }
}
