//! Application state and key handling.

use super::input::move_cursor;
use crate::config::GameConfig;
use crossterm::event::KeyCode;
use noughts_engine::{
    Coordinate, EngineError, GamePhase, MatchController, Outcome, Player, SearchMode,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the controller in deferred-reply mode: after a human move the
/// computer's reply is scheduled and played once the delay has elapsed.
pub struct App {
    controller: MatchController,
    player_name: String,
    computer_name: String,
    cursor: Coordinate,
    status_message: String,
    reply_due: Option<Instant>,
    delay: Duration,
    should_quit: bool,
}

impl App {
    /// Creates the app and starts the first game.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        let controller = MatchController::new(config.match_settings(false))?;
        let mut app = Self {
            controller,
            player_name: config.player_name().clone(),
            computer_name: config.computer_name().clone(),
            cursor: Coordinate::CENTER,
            status_message: String::new(),
            reply_due: None,
            delay: config.computer_delay(),
            should_quit: false,
        };
        app.after_command();
        Ok(app)
    }

    /// The match controller, for rendering.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), EngineError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit(self.cursor)?;
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let index = c as usize - '1' as usize;
                let coord = Coordinate::from_index(index)?;
                self.cursor = coord;
                self.submit(coord)?;
            }
            KeyCode::Char('n') => {
                self.reply_due = None;
                self.controller.start_new_game()?;
                self.after_command();
            }
            KeyCode::Char('m') => {
                self.reply_due = None;
                self.controller
                    .start_new_match(&self.player_name, &self.computer_name)?;
                self.after_command();
            }
            KeyCode::Char('t') => {
                let mode = match self.controller.search_mode() {
                    SearchMode::Optimal => SearchMode::Random,
                    SearchMode::Random => SearchMode::Optimal,
                };
                self.controller.set_search_mode(mode);
                self.after_command();
            }
            _ => {}
        }
        Ok(())
    }

    /// Plays the computer's reply once its delay has passed.
    pub fn tick(&mut self, now: Instant) -> Result<(), EngineError> {
        match self.reply_due {
            Some(due) if now >= due => {
                self.reply_due = None;
                if let Some(coord) = self.controller.apply_computer_move()? {
                    debug!(%coord, "Computer reply played");
                }
                self.after_command();
            }
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self, coord: Coordinate) -> Result<(), EngineError> {
        if self.reply_due.is_some() {
            debug!("Input ignored while the computer is thinking");
            return Ok(());
        }
        let placement = self.controller.submit_human_move(coord)?;
        if !placement.is_placed() && !self.controller.outcome().is_terminal() {
            self.status_message = format!("{} is not available. {}", coord, self.prompt());
            return Ok(());
        }
        self.after_command();
        Ok(())
    }

    /// Re-reads the controller and schedules the computer if it is due.
    fn after_command(&mut self) {
        if self.controller.awaiting_computer() && self.reply_due.is_none() {
            self.reply_due = Some(Instant::now() + self.delay);
        }
        self.status_message = self.describe();
    }

    fn describe(&self) -> String {
        let controller = &self.controller;
        match controller.phase() {
            GamePhase::Finished(Outcome::Draw) => {
                "Draw! Press 'n' for a new game or 'q' to quit.".to_string()
            }
            GamePhase::Finished(outcome) => {
                let winner = outcome
                    .winner()
                    .and_then(|mark| controller.player_for(mark))
                    .map(Player::name)
                    .map(String::as_str)
                    .unwrap_or("Nobody");
                format!("{} wins! Press 'n' for a new game or 'q' to quit.", winner)
            }
            GamePhase::AwaitingFirstTurn | GamePhase::Ongoing => {
                if controller.awaiting_computer() {
                    format!("{} is thinking...", controller.computer().name())
                } else {
                    self.prompt()
                }
            }
        }
    }

    fn prompt(&self) -> String {
        let human = self.controller.human();
        format!("{}, place your {} (arrows + Enter, or 1-9).", human.name(), human.mark())
    }
}
