//! Simple line-based mode
//!
//! Text-based game without the TUI: each typed line becomes letter events plus
//! a submit.

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{InputEvent, Notice, Session};
use crate::output::{print_board, print_notice};
use crate::storage::Storage;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::error;

/// Turn one typed line into input events
///
/// Returns `None` for lines that cannot be a guess at all (too long or not
/// letters); short lines go through so the session can report them.
#[must_use]
pub fn line_events(line: &str) -> Option<Vec<InputEvent>> {
    let letters: Vec<char> = line.trim().chars().collect();
    if letters.len() > WORD_LENGTH || !letters.iter().all(char::is_ascii_alphabetic) {
        return None;
    }

    let mut events: Vec<InputEvent> = letters.into_iter().map(InputEvent::Letter).collect();
    events.push(InputEvent::Submit);
    Some(events)
}

/// Farewell shown when the player quits mid-game
#[must_use]
pub const fn quit_message(practice: bool) -> &'static str {
    if practice {
        "Practice game discarded. See you next time!"
    } else {
        "Progress saved. Come back later!"
    }
}

/// Run the line-based game until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input fails or a guess cannot be saved.
pub fn run_simple<S: Storage>(session: &mut Session<S>, start_notice: Option<&Notice>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Daily Wordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.");
    println!("  {} right letter, right spot", " G ".black().on_green());
    println!("  {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  {} not in the word", " - ".white().on_bright_black());
    println!("\nCommands: 'quit' to exit\n");

    if let Some(notice) = start_notice {
        print_board(session);
        print_notice(notice);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.is_accepting() {
        print_board(session);

        let attempt = session.state().guesses.len() + 1;
        print!("Guess {attempt}/{MAX_ATTEMPTS}: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("failed to read input")?;

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 {}\n", quit_message(session.is_practice()));
                return Ok(());
            }
            "" => continue,
            _ => {}
        }

        let Some(events) = line_events(&line) else {
            println!("❌ Type a {WORD_LENGTH}-letter word using letters only\n");
            continue;
        };

        // Start every line from an empty row
        while !session.row().is_empty() {
            session.handle(InputEvent::DeleteLast)?;
        }

        for event in events {
            match session.handle(event) {
                Ok(Some(notice)) => {
                    if notice.ends_game() {
                        print_board(session);
                    }
                    print_notice(&notice);
                }
                Ok(None) => {}
                Err(err) => {
                    error!(error = %err, "failed to save guess");
                    return Err(err).context("failed to save guess");
                }
            }
        }
    }

    Ok(())
}
