//! Terminal output formatting
//!
//! Board, keyboard and notice printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_notice, print_status};
