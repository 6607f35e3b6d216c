//! Word list loading utilities
//!
//! Word lists come either from the embedded constants or from a file. Files
//! ending in `.json` hold a JSON array of strings; anything else is read as one
//! word per line.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// A word list could not be read or parsed
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse word list {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a word list from a file
///
/// Entries that are not five-letter words are skipped with a warning.
///
/// # Errors
///
/// Returns `DataLoadError` if the file cannot be read, or if a `.json` file is
/// not an array of strings.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/candidates.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, DataLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<String> = if is_json(path) {
        serde_json::from_str(&content).map_err(|source| DataLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    };

    let total = entries.len();
    let words: Vec<Word> = entries
        .into_iter()
        .filter_map(|entry| Word::new(entry.trim()).ok())
        .collect();

    if words.len() < total {
        warn!(
            path = %path.display(),
            skipped = total - words.len(),
            "skipped entries that are not five-letter words"
        );
    }
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(WordList::new(words))
}

/// Load a list from `path` if given, otherwise fall back to `embedded`
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_or_embedded(path: Option<&Path>, embedded: &[&str]) -> Result<WordList, DataLoadError> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(WordList::new(words_from_slice(embedded))),
    }
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::words_from_slice;
/// use daily_wordle::wordlists::CANDIDATES;
///
/// let words = words_from_slice(CANDIDATES);
/// assert_eq!(words.len(), CANDIDATES.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
