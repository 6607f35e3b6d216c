//! Daily solution selection
//!
//! Today's word is a pure function of the calendar date and the candidate
//! pool, so every player sees the same word on the same day without any
//! shared server or random seed.

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

/// The game cannot be configured from the supplied word lists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("candidate word list is empty")]
    EmptyCandidates,
}

/// Polynomial string hash: `hash * 31 + code` over every character
///
/// Wraps at `i64` width; ISO dates never get close.
#[must_use]
pub fn date_hash(text: &str) -> i64 {
    text.chars().fold(0i64, |hash, ch| {
        hash.wrapping_mul(31).wrapping_add(i64::from(u32::from(ch)))
    })
}

/// Pick the solution for `date`
///
/// # Errors
/// Returns `ConfigurationError::EmptyCandidates` if there is nothing to pick.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_wordle::game::select_daily_word;
/// use daily_wordle::wordlists::WordList;
///
/// let candidates = WordList::embedded_candidates();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let first = select_daily_word(date, &candidates).unwrap();
/// let second = select_daily_word(date, &candidates).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn select_daily_word(date: NaiveDate, candidates: &WordList) -> Result<&Word, ConfigurationError> {
    if candidates.is_empty() {
        return Err(ConfigurationError::EmptyCandidates);
    }

    let iso = date.format("%Y-%m-%d").to_string();
    let index = (date_hash(&iso).unsigned_abs() % candidates.len() as u64) as usize;

    candidates
        .get(index)
        .ok_or(ConfigurationError::EmptyCandidates)
}

/// Pick a uniformly random candidate for a practice game
///
/// # Errors
/// Returns `ConfigurationError::EmptyCandidates` if there is nothing to pick.
pub fn select_random_word<'a, R: Rng + ?Sized>(
    candidates: &'a WordList,
    rng: &mut R,
) -> Result<&'a Word, ConfigurationError> {
    if candidates.is_empty() {
        return Err(ConfigurationError::EmptyCandidates);
    }

    let index = rng.random_range(0..candidates.len());
    candidates
        .get(index)
        .ok_or(ConfigurationError::EmptyCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_hash_matches_polynomial() {
        assert_eq!(date_hash(""), 0);
        // 'a' = 97, 'b' = 98: 97 * 31 + 98
        assert_eq!(date_hash("ab"), 3105);
        assert_eq!(date_hash("2024-01-01"), 1_364_342_992_873_024);
    }

    #[test]
    fn selects_by_hash_index() {
        let candidates = list(&["crane", "slate", "trace", "about", "above", "actor", "acute"]);

        // 1_364_342_992_873_024 % 7 == 3
        assert_eq!(
            select_daily_word(date(2024, 1, 1), &candidates).unwrap().text(),
            "about"
        );
        // next day hashes one higher
        assert_eq!(
            select_daily_word(date(2024, 1, 2), &candidates).unwrap().text(),
            "above"
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let candidates = WordList::embedded_candidates();

        for day in 1..=28 {
            let d = date(2025, 2, day);
            let first = select_daily_word(d, &candidates).unwrap().clone();
            let again = select_daily_word(d, &candidates).unwrap();
            assert_eq!(&first, again);
        }
    }

    #[test]
    fn empty_candidates_is_configuration_error() {
        let candidates = WordList::default();
        assert_eq!(
            select_daily_word(date(2024, 1, 1), &candidates),
            Err(ConfigurationError::EmptyCandidates)
        );

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_random_word(&candidates, &mut rng),
            Err(ConfigurationError::EmptyCandidates)
        );
    }

    #[test]
    fn random_word_comes_from_candidates() {
        let candidates = list(&["crane", "slate", "trace"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let word = select_random_word(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(word.text()));
        }
    }
}
