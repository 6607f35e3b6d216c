//! Guess validation

use crate::core::Word;
use crate::wordlists::WordList;
use thiserror::Error;

/// Why a submitted row was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Not enough letters: expected {expected}, got {got}")]
    IncompleteGuess { expected: usize, got: usize },
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
}

/// Check a row of letters and turn it into a lowercase `Word`
///
/// Length is checked before dictionary membership.
///
/// # Errors
/// - `IncompleteGuess` if `letters` is not `solution_len` long
/// - `NotInDictionary` if the joined letters are not a dictionary word
pub fn validate(
    letters: &[u8],
    dictionary: &WordList,
    solution_len: usize,
) -> Result<Word, ValidationError> {
    if letters.len() != solution_len {
        return Err(ValidationError::IncompleteGuess {
            expected: solution_len,
            got: letters.len(),
        });
    }

    let text = String::from_utf8_lossy(letters).to_lowercase();
    if !dictionary.contains(&text) {
        return Err(ValidationError::NotInDictionary(text));
    }

    Word::new(text.as_str()).map_err(|_| ValidationError::NotInDictionary(text))
}
