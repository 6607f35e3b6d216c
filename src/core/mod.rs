//! Core domain types for the game
//!
//! Pure, dependency-light types: words, per-letter feedback and the keyboard
//! indicators derived from it.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterFeedback, ScoringRule, evaluate, evaluate_standard};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};

/// Letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
