//! Player records owned by the match controller.

use crate::error::{EngineError, EngineErrorKind};
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Who is behind a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive from the user.
    Human,
    /// Moves come from the search engine.
    Computer,
}

/// A participant in a match.
///
/// Mark and kind are fixed for the life of the record. The name is set
/// during match setup and the score only moves through the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// The mark this player writes.
    mark: Mark,
    /// Human or computer.
    kind: PlayerKind,
    /// Games won in the current match.
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMark` unless `mark` is X or O.
    #[track_caller]
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark, kind: PlayerKind) -> Result<Self, EngineError> {
        if !mark.is_player_mark() {
            return Err(EngineError::new(EngineErrorKind::IllegalMark(mark)));
        }
        Ok(Self {
            name: name.as_ref().to_string(),
            mark,
            kind,
            score: 0,
        })
    }

    /// True if moves for this player come from the search engine.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
        info!(player = %self.name, score = self.score, "Score incremented");
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("Ada", Mark::X, PlayerKind::Human).unwrap();
        assert_eq!(player.name(), "Ada");
        assert_eq!(*player.mark(), Mark::X);
        assert_eq!(*player.score(), 0);
        assert!(!player.is_computer());
    }

    #[test]
    fn test_empty_mark_is_rejected() {
        let err = Player::new("Nobody", Mark::Empty, PlayerKind::Computer).unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::IllegalMark(Mark::Empty));
    }

    #[test]
    fn test_score_increments_and_resets() {
        let mut player = Player::new("Bot", Mark::O, PlayerKind::Computer).unwrap();
        player.increment_score();
        player.increment_score();
        assert_eq!(*player.score(), 2);
        player.reset_score();
        assert_eq!(*player.score(), 0);
    }
}
