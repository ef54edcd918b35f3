//! Noughts engine - tic-tac-toe game core
//!
//! Board state, win/draw detection, minimax move selection and match
//! control for a human-versus-computer game. Rendering and input live
//! elsewhere: a front end issues commands and then polls the query
//! methods of [`MatchController`].
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Coordinate`], [`Outcome`], [`Move`]
//! - **Board**: cell storage and cached outcome
//! - **Rules**: line-sum win detection and full-board checks
//! - **Search**: random or exhaustive minimax move selection
//! - **Controller**: players, turns, scores
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Coordinate, MatchController, MatchSettings, Turn};
//!
//! # fn main() -> Result<(), noughts_engine::EngineError> {
//! let mut controller = MatchController::new(MatchSettings {
//!     seed: Some(7),
//!     ..MatchSettings::default()
//! })?;
//! controller.start_new_game_with(Turn::Human)?;
//! controller.submit_human_move(Coordinate::new(1, 1)?)?;
//!
//! // The computer has already replied.
//! assert_eq!(controller.history().len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod game;
mod player;
mod search;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, Placement};
pub use controller::{GamePhase, MatchController, MatchSettings, Turn};
pub use error::{EngineError, EngineErrorKind};
pub use game::Game;
pub use player::{Player, PlayerKind};
pub use search::{SearchEngine, SearchMode, WIN_SCORE};
pub use types::{BOARD_SIZE, CELL_COUNT, Coordinate, Mark, Move, Outcome};
