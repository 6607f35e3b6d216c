//! Game session controller
//!
//! Drives one game from input events: assembles the active row, validates and
//! scores submitted guesses, persists every accepted guess and decides when the
//! game ends. Front ends feed it [`InputEvent`]s and draw what it reports; the
//! session never sees a key code or a terminal.

use super::context::{GameContext, StartupError};
use super::input::{InputEvent, InputRow};
use super::selector::select_random_word;
use super::state::{GameState, GameStatus, StateError};
use super::store::StoreError;
use super::validator::{ValidationError, validate};
use crate::core::{KeyboardState, LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::storage::Storage;
use chrono::NaiveDate;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

/// Something the player should be told
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submitted row is shorter than a word
    NotEnoughLetters,
    /// Submitted row is not in the dictionary
    InvalidWord(String),
    /// The guess matched; carries the solution
    Won(Word),
    /// Attempts ran out; carries the solution
    Lost(Word),
    /// The restored game had already ended
    AlreadyFinished(GameStatus),
}

impl Notice {
    /// Whether this notice ends the session
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(
            self,
            Self::Won(_) | Self::Lost(_) | Self::AlreadyFinished(_)
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters => write!(
                f,
                "Not enough letters! Your guess must contain {WORD_LENGTH} letters!"
            ),
            Self::InvalidWord(word) => write!(
                f,
                "{} is not a valid {WORD_LENGTH}-letter word! Try again!",
                word.to_uppercase()
            ),
            Self::Won(solution) => write!(
                f,
                "You WON! The correct solution was: {}",
                solution.text().to_uppercase()
            ),
            Self::Lost(solution) => write!(
                f,
                "Sorry, you've run out of guesses and lost the game! The solution was: {}",
                solution.text().to_uppercase()
            ),
            Self::AlreadyFinished(status) => write!(
                f,
                "You've already {status} today's game. Please come back tomorrow for a new word!"
            ),
        }
    }
}

/// What a board tile shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Empty,
    /// Typed into the active row, not yet submitted
    Filled,
    Scored(LetterFeedback),
}

/// One board cell: the letter (if any) and its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

impl Tile {
    const EMPTY: Self = Self {
        letter: None,
        state: TileState::Empty,
    };
}

/// A single game in progress
#[derive(Debug)]
pub struct Session<S: Storage> {
    context: GameContext<S>,
    state: GameState,
    row: InputRow,
    keyboard: KeyboardState,
    accepting: bool,
    practice: bool,
}

impl<S: Storage> Session<S> {
    /// Load today's game and start taking input
    ///
    /// If today's game has already ended the session starts stopped and the
    /// returned notice says so.
    ///
    /// # Errors
    /// Returns `StartupError` if the saved game cannot be read or a new one
    /// cannot be created.
    pub fn start(
        mut context: GameContext<S>,
        today: NaiveDate,
    ) -> Result<(Self, Option<Notice>), StartupError> {
        let state = context
            .store
            .load(today, &context.candidates, context.scoring)?;
        Ok(Self::resume(context, state, false))
    }

    /// Start a practice game with a random solution
    ///
    /// The game is still written through the context's storage, so pair this
    /// with `MemoryStorage` to keep it away from the daily record.
    ///
    /// # Errors
    /// Returns `StartupError` if no word can be drawn or the first save fails.
    pub fn practice<R: Rng + ?Sized>(
        mut context: GameContext<S>,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Self, StartupError> {
        let solution = select_random_word(&context.candidates, rng)?.clone();
        let state = GameState::new(today, solution, context.scoring);
        context.store.save(&state)?;
        info!(date = %today, "started a practice game");

        Ok(Self::resume(context, state, true).0)
    }

    fn resume(context: GameContext<S>, state: GameState, practice: bool) -> (Self, Option<Notice>) {
        if state.scoring != context.scoring {
            warn!(
                saved = %state.scoring,
                configured = %context.scoring,
                "today's game keeps the scoring rule it was started with"
            );
        }

        let mut keyboard = KeyboardState::new();
        for (guess, feedback) in state.scored_guesses() {
            keyboard.record(guess, &feedback);
        }

        let mut session = Self {
            context,
            state,
            row: InputRow::new(),
            keyboard,
            accepting: true,
            practice,
        };

        let notice = if session.state.status.is_terminal() {
            info!(status = %session.state.status, "today's game has already ended");
            session.stop();
            Some(Notice::AlreadyFinished(session.state.status))
        } else {
            info!(
                date = %session.state.date,
                guesses = session.state.guesses.len(),
                "session started"
            );
            None
        };

        (session, notice)
    }

    /// Apply one input event
    ///
    /// Validation problems come back as notices and leave the game untouched.
    /// Once the session is stopped every event is ignored.
    ///
    /// # Errors
    /// Returns `StoreError` if an accepted guess cannot be saved; the game is
    /// left exactly as it was before the submit.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Notice>, StoreError> {
        if !self.accepting {
            return Ok(None);
        }

        match event {
            InputEvent::Letter(ch) => {
                self.row.push(ch);
                Ok(None)
            }
            InputEvent::DeleteLast => {
                self.row.pop();
                Ok(None)
            }
            InputEvent::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Result<Option<Notice>, StoreError> {
        let guess = match validate(
            self.row.letters(),
            &self.context.dictionary,
            self.state.solution.chars().len(),
        ) {
            Ok(guess) => guess,
            Err(ValidationError::IncompleteGuess { .. }) => {
                return Ok(Some(Notice::NotEnoughLetters));
            }
            Err(ValidationError::NotInDictionary(word)) => {
                return Ok(Some(Notice::InvalidWord(word)));
            }
        };

        // Save the updated game before committing it
        let mut next = self.state.clone();
        let status = match next.record_guess(guess.clone()) {
            Ok(status) => status,
            Err(StateError::Finished(status)) => {
                self.stop();
                return Ok(Some(Notice::AlreadyFinished(status)));
            }
        };
        self.context.store.save(&next)?;
        self.state = next;

        let feedback = self.state.score(&guess);
        self.keyboard.record(&guess, &feedback);
        self.row.clear();
        debug!(
            guess = %guess,
            feedback = %feedback.to_emoji(),
            attempt = self.state.guesses.len(),
            "guess accepted"
        );

        let notice = match status {
            GameStatus::Won => Some(Notice::Won(self.state.solution.clone())),
            GameStatus::Lost => Some(Notice::Lost(self.state.solution.clone())),
            GameStatus::InProgress => None,
        };
        if notice.is_some() {
            info!(status = %status, attempts = self.state.guesses.len(), "game over");
            self.stop();
        }

        Ok(notice)
    }

    /// Stop taking input; safe to call more than once
    pub fn stop(&mut self) {
        if self.accepting {
            debug!("input disabled");
        }
        self.accepting = false;
    }

    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Whether this is an unsaved practice game
    #[must_use]
    pub const fn is_practice(&self) -> bool {
        self.practice
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn row(&self) -> &InputRow {
        &self.row
    }

    #[must_use]
    pub const fn context(&self) -> &GameContext<S> {
        &self.context
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.state.attempts_remaining()
    }

    /// Every board row: scored guesses, then the active row, then blanks
    #[must_use]
    pub fn tiles(&self) -> Vec<[Tile; WORD_LENGTH]> {
        let mut rows: Vec<[Tile; WORD_LENGTH]> = self
            .state
            .scored_guesses()
            .map(|(guess, feedback)| {
                let mut row = [Tile::EMPTY; WORD_LENGTH];
                for (tile, (&letter, &state)) in row
                    .iter_mut()
                    .zip(guess.chars().iter().zip(feedback.letters()))
                {
                    *tile = Tile {
                        letter: Some(char::from(letter)),
                        state: TileState::Scored(state),
                    };
                }
                row
            })
            .collect();

        if rows.len() < MAX_ATTEMPTS && !self.state.status.is_terminal() {
            let mut active = [Tile::EMPTY; WORD_LENGTH];
            for (tile, &letter) in active.iter_mut().zip(self.row.letters()) {
                *tile = Tile {
                    letter: Some(char::from(letter)),
                    state: TileState::Filled,
                };
            }
            rows.push(active);
        }

        rows.resize(MAX_ATTEMPTS, [Tile::EMPTY; WORD_LENGTH]);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringRule;
    use crate::storage::MemoryStorage;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    /// Memory storage whose writes can be switched to fail
    struct FullDisk {
        inner: MemoryStorage,
        full: Rc<Cell<bool>>,
    }

    impl Storage for FullDisk {
        fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, blob: &[u8]) -> io::Result<()> {
            if self.full.get() {
                return Err(io::Error::other("disk full"));
            }
            self.inner.write(key, blob)
        }
    }

    fn list(words: &[&str]) -> WordList {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Context whose daily word on 2024-01-01 is "crane"
    fn context_with<S: Storage>(storage: S, scoring: ScoringRule) -> GameContext<S> {
        let dictionary = list(&[
            "crane", "trace", "slate", "about", "cloth", "geese", "audio", "moldy",
        ]);
        // 2024-01-01 hashes to index 3 of a seven-word pool
        let candidates = list(&["slate", "trace", "cloth", "crane", "audio", "geese", "about"]);
        GameContext::new(dictionary, candidates, storage, scoring).unwrap()
    }

    fn new_session() -> Session<MemoryStorage> {
        let (session, notice) =
            Session::start(context_with(MemoryStorage::new(), ScoringRule::Naive), today()).unwrap();
        assert_eq!(notice, None);
        assert_eq!(session.state().solution.text(), "crane");
        session
    }

    fn type_word<S: Storage>(session: &mut Session<S>, word: &str) {
        for ch in word.chars() {
            session.handle(InputEvent::Letter(ch)).unwrap();
        }
    }

    fn guess(session: &mut Session<MemoryStorage>, word: &str) -> Option<Notice> {
        type_word(session, word);
        session.handle(InputEvent::Submit).unwrap()
    }

    #[test]
    fn fresh_session_accepts_input() {
        let session = new_session();
        assert!(session.is_accepting());
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(session.tiles().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn incomplete_guess_consumes_nothing() {
        let mut session = new_session();
        let notice = guess(&mut session, "cran");

        assert_eq!(notice, Some(Notice::NotEnoughLetters));
        assert!(session.state().guesses.is_empty());
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        // letters stay in the row for editing
        assert_eq!(session.row().letters(), b"cran");
        assert!(session.is_accepting());
    }

    #[test]
    fn unknown_word_consumes_nothing() {
        let mut session = new_session();
        let notice = guess(&mut session, "zzzzz");

        assert_eq!(notice, Some(Notice::InvalidWord("zzzzz".to_string())));
        assert!(session.state().guesses.is_empty());
        assert!(session.is_accepting());
    }

    #[test]
    fn full_row_and_empty_row_edits_are_noops() {
        let mut session = new_session();

        session.handle(InputEvent::DeleteLast).unwrap();
        assert!(session.row().is_empty());

        type_word(&mut session, "craneq");
        assert_eq!(session.row().letters(), b"crane");
        assert!(session.state().guesses.is_empty());

        session.handle(InputEvent::DeleteLast).unwrap();
        assert_eq!(session.row().letters(), b"cran");
    }

    #[test]
    fn accepted_guess_is_scored_and_saved() {
        let mut session = new_session();
        assert_eq!(guess(&mut session, "TRACE"), None);

        assert_eq!(session.state().guesses, vec![Word::new("trace").unwrap()]);
        assert!(session.row().is_empty());
        assert_eq!(session.keyboard().state(b't'), Some(LetterFeedback::Absent));
        assert_eq!(session.keyboard().state(b'c'), Some(LetterFeedback::Present));

        let first_row = session.tiles()[0];
        assert_eq!(first_row[0].letter, Some('t'));
        assert_eq!(
            first_row.map(|tile| tile.state),
            [
                TileState::Scored(LetterFeedback::Absent),
                TileState::Scored(LetterFeedback::Correct),
                TileState::Scored(LetterFeedback::Correct),
                TileState::Scored(LetterFeedback::Present),
                TileState::Scored(LetterFeedback::Correct),
            ]
        );

        let saved = session.context().store.peek().unwrap().unwrap();
        assert_eq!(&saved, session.state());
    }

    #[test]
    fn active_row_is_shown_as_filled() {
        let mut session = new_session();
        guess(&mut session, "slate");
        type_word(&mut session, "cr");

        let active = session.tiles()[1];
        assert_eq!(active[0].letter, Some('c'));
        assert_eq!(active[0].state, TileState::Filled);
        assert_eq!(active[2], Tile::EMPTY);
    }

    #[test]
    fn win_on_third_attempt_ends_immediately() {
        let mut session = new_session();
        assert_eq!(guess(&mut session, "slate"), None);
        assert_eq!(guess(&mut session, "trace"), None);

        let notice = guess(&mut session, "crane");
        assert_eq!(notice, Some(Notice::Won(Word::new("crane").unwrap())));
        assert_eq!(session.state().status, GameStatus::Won);
        assert_eq!(session.state().guesses.len(), 3);
        assert!(!session.is_accepting());

        // no further attempts are offered
        assert_eq!(guess(&mut session, "slate"), None);
        assert_eq!(session.state().guesses.len(), 3);
        assert!(session.row().is_empty());
    }

    #[test]
    fn six_misses_lose_and_reveal_solution() {
        let mut session = new_session();
        for word in ["slate", "trace", "cloth", "geese", "audio"] {
            assert_eq!(guess(&mut session, word), None);
        }

        let notice = guess(&mut session, "about");
        assert_eq!(notice, Some(Notice::Lost(Word::new("crane").unwrap())));
        assert_eq!(session.state().status, GameStatus::Lost);
        assert_eq!(session.attempts_remaining(), 0);
        assert!(!session.is_accepting());

        let saved = session.context().store.peek().unwrap().unwrap();
        assert_eq!(saved.status, GameStatus::Lost);
    }

    #[test]
    fn reload_after_win_reports_already_finished() {
        let mut session = new_session();
        guess(&mut session, "slate");
        guess(&mut session, "crane");
        let finished = session.state().clone();

        let storage = session.context.store.into_storage();
        let (mut reloaded, notice) =
            Session::start(context_with(storage, ScoringRule::Naive), today()).unwrap();

        assert_eq!(notice, Some(Notice::AlreadyFinished(GameStatus::Won)));
        assert_eq!(reloaded.state(), &finished);
        assert!(!reloaded.is_accepting());

        // keyboard is rebuilt from the saved guesses
        assert_eq!(reloaded.keyboard().state(b'c'), Some(LetterFeedback::Correct));

        assert_eq!(guess(&mut reloaded, "trace"), None);
        assert_eq!(reloaded.state(), &finished);
    }

    #[test]
    fn reload_mid_game_resumes() {
        let mut session = new_session();
        guess(&mut session, "slate");

        let storage = session.context.store.into_storage();
        let (mut reloaded, notice) =
            Session::start(context_with(storage, ScoringRule::Naive), today()).unwrap();

        assert_eq!(notice, None);
        assert_eq!(reloaded.state().guesses.len(), 1);
        assert_eq!(reloaded.attempts_remaining(), MAX_ATTEMPTS - 1);
        assert_eq!(
            guess(&mut reloaded, "crane"),
            Some(Notice::Won(Word::new("crane").unwrap()))
        );
    }

    #[test]
    fn stop_is_idempotent() {
        let mut session = new_session();
        session.stop();
        session.stop();
        assert!(!session.is_accepting());

        session.handle(InputEvent::Letter('a')).unwrap();
        assert!(session.row().is_empty());
    }

    #[test]
    fn scoring_rule_flows_into_tiles() {
        let (mut session, _) =
            Session::start(context_with(MemoryStorage::new(), ScoringRule::Standard), today())
                .unwrap();
        guess(&mut session, "geese");

        let states = session.tiles()[0].map(|tile| tile.state);
        assert_eq!(states[1], TileState::Scored(LetterFeedback::Absent));
        assert_eq!(states[4], TileState::Scored(LetterFeedback::Correct));
    }

    #[test]
    fn reload_keeps_the_rule_the_game_started_with() {
        let (mut session, _) =
            Session::start(context_with(MemoryStorage::new(), ScoringRule::Standard), today())
                .unwrap();
        guess(&mut session, "geese");
        let before = session.tiles()[0];
        let keyboard_before = session.keyboard().clone();

        let storage = session.context.store.into_storage();
        let (reloaded, _) =
            Session::start(context_with(storage, ScoringRule::Naive), today()).unwrap();

        assert_eq!(reloaded.state().scoring, ScoringRule::Standard);
        assert_eq!(reloaded.tiles()[0], before);
        assert_eq!(reloaded.keyboard(), &keyboard_before);
        assert_eq!(reloaded.keyboard().state(b'e'), Some(LetterFeedback::Correct));
    }

    #[test]
    fn failed_save_leaves_the_game_untouched() {
        let full = Rc::new(Cell::new(false));
        let storage = FullDisk {
            inner: MemoryStorage::new(),
            full: Rc::clone(&full),
        };
        let (mut session, _) =
            Session::start(context_with(storage, ScoringRule::Naive), today()).unwrap();
        let saved_before = session.context().store.peek().unwrap();

        full.set(true);
        type_word(&mut session, "slate");
        let result = session.handle(InputEvent::Submit);

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(session.state().guesses.is_empty());
        assert_eq!(session.row().letters(), b"slate");
        assert_eq!(session.keyboard().state(b's'), None);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.is_accepting());
        assert_eq!(session.context().store.peek().unwrap(), saved_before);

        // the same row goes through once the disk recovers
        full.set(false);
        assert_eq!(session.handle(InputEvent::Submit).unwrap(), None);
        assert_eq!(session.state().guesses.len(), 1);
    }

    #[test]
    fn practice_game_draws_from_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = Session::practice(
            context_with(MemoryStorage::new(), ScoringRule::Naive),
            today(),
            &mut rng,
        )
        .unwrap();

        assert!(session.context().candidates.contains(session.state().solution.text()));
        assert!(session.is_accepting());
        assert!(session.is_practice());
    }

    #[test]
    fn notices_read_like_the_game() {
        assert_eq!(
            Notice::AlreadyFinished(GameStatus::Won).to_string(),
            "You've already won today's game. Please come back tomorrow for a new word!"
        );
        assert!(Notice::Lost(Word::new("crane").unwrap()).ends_game());
        assert!(!Notice::NotEnoughLetters.ends_game());
    }
}
