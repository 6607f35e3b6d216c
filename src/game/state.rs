//! The saved state of one day's game

use crate::core::{Feedback, MAX_ATTEMPTS, ScoringRule, Word};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost; no further guesses are taken
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A guess was offered to a game that cannot take it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("today's game is already {0}")]
    Finished(GameStatus),
}

/// One calendar day's attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub date: NaiveDate,
    pub solution: Word,
    pub guesses: Vec<Word>,
    pub status: GameStatus,
    /// Rule the game is scored under, fixed when the game starts
    #[serde(default)]
    pub scoring: ScoringRule,
}

impl GameState {
    /// A fresh game with no guesses
    #[must_use]
    pub const fn new(date: NaiveDate, solution: Word, scoring: ScoringRule) -> Self {
        Self {
            date,
            solution,
            guesses: Vec::new(),
            status: GameStatus::InProgress,
            scoring,
        }
    }

    /// Append a guess and move the status forward
    ///
    /// Returns the status after the guess: `Won` on an exact match, `Lost`
    /// when the last attempt is used up, otherwise `InProgress`.
    ///
    /// # Errors
    /// Returns `StateError::Finished` if the game is already won or lost.
    pub fn record_guess(&mut self, guess: Word) -> Result<GameStatus, StateError> {
        if self.status.is_terminal() {
            return Err(StateError::Finished(self.status));
        }

        let solved = guess == self.solution;
        self.guesses.push(guess);

        if solved {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        Ok(self.status)
    }

    /// Feedback for `guess` under this game's rule
    #[must_use]
    pub fn score(&self, guess: &Word) -> Feedback {
        Feedback::calculate(guess, &self.solution, self.scoring)
    }

    /// Each guess paired with its feedback, oldest first
    pub fn scored_guesses(&self) -> impl Iterator<Item = (&Word, Feedback)> {
        self.guesses.iter().map(|guess| (guess, self.score(guess)))
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Check the invariants a deserialized record must hold
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let solved_at = self.guesses.iter().position(|g| *g == self.solution);

        if self.guesses.len() > MAX_ATTEMPTS {
            return false;
        }

        match self.status {
            GameStatus::InProgress => solved_at.is_none() && self.guesses.len() < MAX_ATTEMPTS,
            GameStatus::Won => solved_at == Some(self.guesses.len().wrapping_sub(1)),
            GameStatus::Lost => solved_at.is_none() && self.guesses.len() == MAX_ATTEMPTS,
        }
    }
}
