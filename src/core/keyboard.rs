//! Keyboard-wide letter indicators
//!
//! Tracks the strongest feedback seen for each letter across all guesses.

use super::{Feedback, LetterFeedback, Word};
use rustc_hash::FxHashMap;

/// Best-known state of every letter that has been guessed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterFeedback>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the indicators
    ///
    /// A letter only ever moves up in priority: once `Correct`, always `Correct`.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.letters()) {
            self.letters
                .entry(letter)
                .and_modify(|current| *current = (*current).max(state))
                .or_insert(state);
        }
    }

    /// State of a letter, or `None` if it has not been guessed yet
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<LetterFeedback> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }
}
