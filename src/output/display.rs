//! Display functions for the line-based commands

use super::formatters::{KEYBOARD_ROWS, colored_feedback, colored_tile, keyboard_row, share_grid};
use crate::core::MAX_ATTEMPTS;
use crate::game::{GameState, GameStatus, Notice, Session};
use crate::storage::Storage;
use colored::Colorize;

/// Print the board and keyboard of a session
pub fn print_board<S: Storage>(session: &Session<S>) {
    println!();
    for row in session.tiles() {
        let line: Vec<String> = row.iter().map(|&tile| colored_tile(tile).to_string()).collect();
        println!("   {}", line.join(" "));
    }

    println!();
    for (indent, letters) in ["", " ", "   "].iter().zip(KEYBOARD_ROWS) {
        println!("   {indent}{}", keyboard_row(session.keyboard(), letters));
    }
    println!();
}

/// Print a notice in a colour matching its tone
pub fn print_notice(notice: &Notice) {
    let text = notice.to_string();
    match notice {
        Notice::Won(_) => println!("\n🎉 {}", text.bright_green().bold()),
        Notice::Lost(_) => println!("\n{}", text.bright_red().bold()),
        Notice::AlreadyFinished(_) => println!("{}", text.bright_yellow()),
        Notice::NotEnoughLetters | Notice::InvalidWord(_) => println!("❌ {}", text.red()),
    }
}

/// Print the saved game for a day without touching it
pub fn print_status(state: Option<&GameState>) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "DAILY WORDLE".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    let Some(state) = state else {
        println!("\nNo game played today yet.");
        return;
    };

    let status = match state.status {
        GameStatus::InProgress => "in progress".yellow(),
        GameStatus::Won => "won".green().bold(),
        GameStatus::Lost => "lost".red().bold(),
    };
    println!("\n   Date:      {}", state.date);
    println!("   Status:    {status}");
    println!("   Attempts:  {}/{}", state.guesses.len(), MAX_ATTEMPTS);
    println!("   Scoring:   {}", state.scoring);

    if !state.guesses.is_empty() {
        println!();
        for (guess, feedback) in state.scored_guesses() {
            let tiles: Vec<String> = guess
                .text()
                .to_uppercase()
                .chars()
                .zip(feedback.letters())
                .map(|(letter, &fb)| colored_feedback(&format!(" {letter} "), fb).to_string())
                .collect();
            println!("   {}", tiles.join(" "));
        }
    }

    if state.status.is_terminal() {
        println!("\n{}", share_grid(state));
    }
}
