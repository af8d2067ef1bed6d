use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Player actions that require a round in progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    Hit,
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Hit => f.write_str("hit"),
            Action::Stand => f.write_str("stand"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    /// Bet text was not a positive number. Carries the rejected input.
    #[error("Please enter a valid bet amount.")]
    InvalidBet(String),

    #[error("No active game to {0}. Start a new game.")]
    InactiveOperation(Action),

    #[error("Error writing to log file: {0}")]
    LogWrite(#[from] std::io::Error),
}

impl GameError {
    /// True for the conditions a player can fix by doing something else.
    pub fn is_advisory(&self) -> bool {
        matches!(self, GameError::InvalidBet(_) | GameError::InactiveOperation(_))
    }
}
