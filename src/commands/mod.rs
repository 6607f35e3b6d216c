//! Command implementations

pub mod simple;
pub mod status;

pub use simple::{line_events, run_simple};
pub use status::{run_status, todays_game};
