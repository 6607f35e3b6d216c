//! Persisting the day's game
//!
//! One record is kept under a fixed key. Loading for a new day replaces
//! whatever was there, so only the current day's attempt ever survives.

use super::selector::{ConfigurationError, select_daily_word};
use super::state::GameState;
use crate::core::ScoringRule;
use crate::storage::Storage;
use crate::wordlists::WordList;
use chrono::NaiveDate;
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key of the saved game
pub const GAME_KEY: &str = "daily_wordle_state";

/// Reading or writing the saved game failed
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game storage failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode game state: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Loads and saves the single active game
#[derive(Debug)]
pub struct GameStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> GameStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, GAME_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Today's game: the saved one if it is for `today`, otherwise a fresh one
    ///
    /// A fresh game is scored under `scoring` and saved before it is returned.
    /// A restored game keeps the rule it was started with.
    ///
    /// # Errors
    /// Returns `StoreError` if storage fails, or if a fresh game is needed and
    /// `candidates` is empty.
    pub fn load(
        &mut self,
        today: NaiveDate,
        candidates: &WordList,
        scoring: ScoringRule,
    ) -> Result<GameState, StoreError> {
        if let Some(saved) = self.peek()? {
            if saved.date == today {
                debug!(date = %today, status = %saved.status, "restored saved game");
                return Ok(saved);
            }
            info!(saved = %saved.date, today = %today, "discarding game from another day");
        }

        let solution = select_daily_word(today, candidates)?.clone();
        let state = GameState::new(today, solution, scoring);
        self.save(&state)?;
        info!(date = %today, %scoring, "started a new daily game");
        debug!(solution = %state.solution, "daily solution");

        Ok(state)
    }

    /// The saved game, if there is a readable one
    ///
    /// Records that do not parse or break the game invariants are treated as
    /// missing.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the storage cannot be read.
    pub fn peek(&self) -> Result<Option<GameState>, StoreError> {
        let Some(blob) = self.storage.read(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_slice::<GameState>(&blob) {
            Ok(state) if state.is_consistent() => Ok(Some(state)),
            Ok(state) => {
                warn!(date = %state.date, "ignoring saved game that breaks game rules");
                Ok(None)
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable saved game");
                Ok(None)
            }
        }
    }

    /// Overwrite the saved game
    ///
    /// # Errors
    /// Returns `StoreError` if encoding or writing fails.
    pub fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        let blob = serde_json::to_vec_pretty(state)?;
        self.storage.write(&self.key, &blob)?;
        Ok(())
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
