//! Word lists for the game
//!
//! Two lists are used: the broad dictionary of valid guesses and the smaller
//! candidate pool that daily solutions are drawn from. Defaults are compiled
//! into the binary; either can be replaced from a file at startup.

mod embedded;
pub mod loader;

pub use embedded::{CANDIDATES, CANDIDATES_COUNT, DICTIONARY, DICTIONARY_COUNT};
pub use loader::DataLoadError;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// An ordered, immutable list of words with fast membership checks
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list, keeping the first occurrence of any duplicate
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        Self { words, index }
    }

    /// The compiled-in dictionary of valid guesses
    #[must_use]
    pub fn embedded_dictionary() -> Self {
        Self::new(loader::words_from_slice(DICTIONARY))
    }

    /// The compiled-in pool of daily solutions
    #[must_use]
    pub fn embedded_candidates() -> Self {
        Self::new(loader::words_from_slice(CANDIDATES))
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(&text.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
