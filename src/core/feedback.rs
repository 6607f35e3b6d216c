//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the solution:
//! - `Correct` = right letter, right position
//! - `Present` = letter appears somewhere in the solution
//! - `Absent`  = letter not in the solution
//!
//! Feedback is never stored. It is recomputed from solution + guess whenever
//! the board is drawn or a game is restored.

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a single letter
///
/// Variants are ordered by display priority, so `max` picks the stronger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How duplicate letters are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Position match, else membership anywhere in the solution.
    ///
    /// Every copy of a letter that occurs in the solution is marked at least
    /// `Present`, regardless of how many times it occurs there.
    #[default]
    Naive,
    /// Exact matches consume solution letters first, then the remaining
    /// letters are handed out left to right as `Present`.
    Standard,
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "standard" => Ok(Self::Standard),
            other => Err(format!("Unknown scoring rule: {other} (expected naive or standard)")),
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `solution` with the given rule
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word, rule: ScoringRule) -> Self {
        match rule {
            ScoringRule::Naive => evaluate(guess, solution),
            ScoringRule::Standard => evaluate_standard(guess, solution),
        }
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&state| state == LetterFeedback::Correct)
            .count()
    }

    /// Convert to an emoji row such as "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.emoji()).collect()
    }
}

/// Evaluate a guess with the naive per-position rule
///
/// # Examples
/// ```
/// use daily_wordle::core::{Word, LetterFeedback::*, evaluate};
///
/// let guess = Word::new("trace").unwrap();
/// let solution = Word::new("crane").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &solution).letters(),
///     &[Absent, Correct, Correct, Present, Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> Feedback {
    let mut result = [LetterFeedback::Absent; WORD_LENGTH];

    for (i, &letter) in guess.chars().iter().enumerate() {
        result[i] = if solution.char_at(i) == letter {
            LetterFeedback::Correct
        } else if solution.has_letter(letter) {
            LetterFeedback::Present
        } else {
            LetterFeedback::Absent
        };
    }

    Feedback(result)
}

/// Evaluate a guess with standard duplicate-letter handling
#[must_use]
pub fn evaluate_standard(guess: &Word, solution: &Word) -> Feedback {
    let mut result = [LetterFeedback::Absent; WORD_LENGTH];
    let mut available: FxHashMap<u8, u8> = FxHashMap::default();
    for &letter in solution.chars() {
        *available.entry(letter).or_insert(0) += 1;
    }

    // First pass: exact position matches
    // Allow: Index needed to compare guess[i] with solution[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        if letter == solution.char_at(i) {
            result[i] = LetterFeedback::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, only while unclaimed copies remain
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = LetterFeedback::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}
