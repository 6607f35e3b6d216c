//! Input events and the in-flight guess row

use crate::core::WORD_LENGTH;

/// A discrete input from whichever front end drives the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Type a letter into the active row
    Letter(char),
    /// Submit the active row as a guess
    Submit,
    /// Remove the last letter of the active row
    DeleteLast,
}

/// Bounded buffer of letters typed but not yet submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    letters: Vec<u8>,
}

impl InputRow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(WORD_LENGTH),
        }
    }

    /// Append a letter; no-op if the row is full or `ch` is not a letter
    ///
    /// Returns whether the row changed.
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(ch.to_ascii_lowercase() as u8);
        true
    }

    /// Remove the last letter; no-op on an empty row
    ///
    /// Returns whether the row changed.
    pub fn pop(&mut self) -> bool {
        self.letters.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= WORD_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_lowercases_letters() {
        let mut row = InputRow::new();
        assert!(row.push('C'));
        assert!(row.push('r'));
        assert_eq!(row.letters(), b"cr");
    }

    #[test]
    fn push_on_full_row_is_noop() {
        let mut row = InputRow::new();
        for ch in "crane".chars() {
            assert!(row.push(ch));
        }
        assert!(row.is_full());

        assert!(!row.push('s'));
        assert_eq!(row.letters(), b"crane");
    }

    #[test]
    fn pop_on_empty_row_is_noop() {
        let mut row = InputRow::new();
        assert!(!row.pop());
        assert!(row.is_empty());

        row.push('a');
        assert!(row.pop());
        assert!(!row.pop());
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut row = InputRow::new();
        assert!(!row.push('1'));
        assert!(!row.push(' '));
        assert!(!row.push('é'));
        assert_eq!(row.len(), 0);
    }
}
