//! Formatting utilities for terminal output

use crate::core::{KeyboardState, LetterFeedback, MAX_ATTEMPTS};
use crate::game::{GameState, GameStatus, Tile, TileState};
use colored::{ColoredString, Colorize};

/// Keyboard rows as laid out on a QWERTY keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render one tile as a coloured, padded capital letter
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter.map_or('_', |c| c.to_ascii_uppercase()));
    match tile.state {
        TileState::Empty => text.bright_black(),
        TileState::Filled => text.bold(),
        TileState::Scored(state) => colored_feedback(&text, state),
    }
}

/// Colour `text` by feedback state
#[must_use]
pub fn colored_feedback(text: &str, state: LetterFeedback) -> ColoredString {
    match state {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

/// One keyboard row with every key coloured by its best-known state
#[must_use]
pub fn keyboard_row(keyboard: &KeyboardState, letters: &str) -> String {
    letters
        .bytes()
        .map(|letter| {
            let key = (letter.to_ascii_uppercase() as char).to_string();
            match keyboard.state(letter) {
                Some(state) => colored_feedback(&key, state).to_string(),
                None => key,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shareable summary: header line plus one emoji row per guess
///
/// ```text
/// Daily Wordle 2024-01-01 3/6
///
/// ⬜🟨⬜⬜🟩
/// ⬜🟩🟩🟨🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    let score = if state.status == GameStatus::Won {
        state.guesses.len().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![
        format!("Daily Wordle {} {score}/{}", state.date, MAX_ATTEMPTS),
        String::new(),
    ];
    lines.extend(state.scored_guesses().map(|(_, feedback)| feedback.to_emoji()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoringRule, Word};
    use chrono::NaiveDate;

    fn played_under(rule: ScoringRule, guesses: &[&str]) -> GameState {
        let mut state = GameState::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Word::new("crane").unwrap(),
            rule,
        );
        for guess in guesses {
            state.record_guess(Word::new(*guess).unwrap()).unwrap();
        }
        state
    }

    fn played(guesses: &[&str]) -> GameState {
        played_under(ScoringRule::Naive, guesses)
    }

    #[test]
    fn share_grid_for_win() {
        let grid = share_grid(&played(&["trace", "crane"]));
        assert_eq!(
            grid,
            "Daily Wordle 2024-01-01 2/6\n\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_for_unfinished_game_shows_x() {
        let grid = share_grid(&played(&["trace"]));
        assert!(grid.starts_with("Daily Wordle 2024-01-01 X/6"));
    }

    #[test]
    fn share_grid_uses_the_games_rule() {
        let naive = share_grid(&played_under(ScoringRule::Naive, &["geese"]));
        let standard = share_grid(&played_under(ScoringRule::Standard, &["geese"]));
        assert!(naive.ends_with("⬜🟨🟨⬜🟩"));
        assert!(standard.ends_with("⬜⬜⬜⬜🟩"));
    }

    #[test]
    fn keyboard_row_plain_for_unguessed() {
        colored::control::set_override(false);
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard_row(&keyboard, "abc"), "A B C");
    }

    #[test]
    fn empty_tile_shows_placeholder() {
        colored::control::set_override(false);
        let tile = Tile {
            letter: None,
            state: TileState::Empty,
        };
        assert_eq!(colored_tile(tile).to_string(), " _ ");
    }
}
