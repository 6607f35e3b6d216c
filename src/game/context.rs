//! Everything a session needs, passed in explicitly

use super::selector::ConfigurationError;
use super::store::{GameStore, StoreError};
use crate::core::ScoringRule;
use crate::storage::Storage;
use crate::wordlists::{DataLoadError, WordList};
use thiserror::Error;

/// The game could not be brought up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("word list error: {0}")]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for StartupError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Configuration(err) => Self::Configuration(err),
            other => Self::Store(other),
        }
    }
}

/// Word lists, storage and rules for one session
#[derive(Debug)]
pub struct GameContext<S: Storage> {
    pub dictionary: WordList,
    pub candidates: WordList,
    pub store: GameStore<S>,
    pub scoring: ScoringRule,
}

impl<S: Storage> GameContext<S> {
    /// Bundle loaded word lists with a storage backend
    ///
    /// # Errors
    /// Returns `ConfigurationError::EmptyCandidates` if no solution can ever be
    /// drawn from `candidates`.
    pub fn new(
        dictionary: WordList,
        candidates: WordList,
        storage: S,
        scoring: ScoringRule,
    ) -> Result<Self, ConfigurationError> {
        if candidates.is_empty() {
            return Err(ConfigurationError::EmptyCandidates);
        }

        Ok(Self {
            dictionary,
            candidates,
            store: GameStore::new(storage),
            scoring,
        })
    }
}
