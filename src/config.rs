//! Runtime configuration
//!
//! Settings come from an optional TOML file; command-line flags are applied on
//! top by the binary.
//!
//! ```toml
//! state_dir = "/home/me/.local/state/daily_wordle"
//! dictionary = "words/dictionary.json"
//! candidates = "words/game_words.json"
//! scoring = "standard"
//! log_filter = "daily_wordle=debug"
//! ```

use crate::core::ScoringRule;
use crate::game::{GameContext, StartupError};
use crate::storage::Storage;
use crate::wordlists::loader::load_or_embedded;
use crate::wordlists::{CANDIDATES, DICTIONARY, DataLoadError, WordList};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::error;

/// The config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the saved game
    pub state_dir: PathBuf,
    /// Dictionary override; embedded list when unset
    pub dictionary: Option<PathBuf>,
    /// Candidate pool override; embedded list when unset
    pub candidates: Option<PathBuf>,
    pub scoring: ScoringRule,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Where the TUI writes its log
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(".daily_wordle"),
            dictionary: None,
            candidates: None,
            scoring: ScoringRule::Naive,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("daily_wordle.log"),
        }
    }
}

impl Config {
    /// Read a TOML config file; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config from `path` if given, otherwise defaults
    ///
    /// # Errors
    /// See [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Load the dictionary and candidate pool this config points at
    ///
    /// # Errors
    /// Returns `DataLoadError` if an override file cannot be loaded.
    pub fn load_word_lists(&self) -> Result<(WordList, WordList), DataLoadError> {
        let dictionary = load_or_embedded(self.dictionary.as_deref(), DICTIONARY)?;
        let candidates = load_or_embedded(self.candidates.as_deref(), CANDIDATES)?;
        Ok((dictionary, candidates))
    }

    /// Load word lists and bundle them with `storage` into a game context
    ///
    /// Failures are logged before they are returned.
    ///
    /// # Errors
    /// Returns `StartupError` if a word list cannot be loaded or the candidate
    /// pool is empty.
    pub fn build_context<S: Storage>(&self, storage: S) -> Result<GameContext<S>, StartupError> {
        let (dictionary, candidates) = self
            .load_word_lists()
            .inspect_err(|err| error!(error = %err, "could not load word lists"))?;
        let context = GameContext::new(dictionary, candidates, storage, self.scoring)
            .inspect_err(|err| error!(error = %err, "word lists cannot start a game"))?;
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ConfigurationError;
    use crate::storage::MemoryStorage;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared with a scoped subscriber
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.scoring, ScoringRule::Naive);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_temp(
            ".toml",
            "state_dir = \"/tmp/wordle\"\nscoring = \"standard\"\n",
        );
        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.state_dir, PathBuf::from("/tmp/wordle"));
        assert_eq!(config.scoring, ScoringRule::Standard);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_temp(".toml", "max_attempts = 10\n");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn embedded_lists_build_a_context() {
        let context = Config::default().build_context(MemoryStorage::new()).unwrap();
        assert!(!context.candidates.is_empty());
        assert!(context.dictionary.contains("crane"));
    }

    #[test]
    fn empty_candidate_file_is_a_configuration_error() {
        let candidates = write_temp(".json", "[]");
        let config = Config {
            candidates: Some(candidates.path().to_path_buf()),
            ..Config::default()
        };

        let err = config.build_context(MemoryStorage::new()).unwrap_err();
        assert!(matches!(
            err,
            StartupError::Configuration(ConfigurationError::EmptyCandidates)
        ));
    }

    #[test]
    fn unreadable_word_list_is_a_load_error() {
        let config = Config {
            dictionary: Some(PathBuf::from("/definitely/not/here.json")),
            ..Config::default()
        };

        let err = config.build_context(MemoryStorage::new()).unwrap_err();
        assert!(matches!(err, StartupError::DataLoad(_)));
    }

    #[test]
    fn load_failures_are_logged() {
        let config = Config {
            dictionary: Some(PathBuf::from("/definitely/not/here.json")),
            ..Config::default()
        };

        let logs = Captured::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || {
            config.build_context(MemoryStorage::new())
        });

        assert!(result.is_err());
        let text = logs.text();
        assert!(text.contains("ERROR"));
        assert!(text.contains("could not load word lists"));
        assert!(text.contains("here.json"));
    }
}
