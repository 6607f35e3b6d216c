//! Daily Wordle
//!
//! A five-letter word guessing game with one shared solution per calendar day.
//! The day's word is picked deterministically from the date, guesses are
//! checked against a dictionary, and progress is saved so a restarted game
//! resumes where it left off.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daily_wordle::core::{Feedback, ScoringRule, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &solution, ScoringRule::Naive);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Daily selection, validation, persistence and the game session
pub mod game;

// Word lists
pub mod wordlists;

// Key-value persistence backends
pub mod storage;

pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
