//! Read-only look at today's saved game

use crate::game::{GameState, GameStore, StoreError};
use crate::output::print_status;
use crate::storage::Storage;
use chrono::NaiveDate;

/// Today's saved game, ignoring records left over from other days
///
/// # Errors
///
/// Returns `StoreError` if the storage cannot be read.
pub fn todays_game<S: Storage>(
    store: &GameStore<S>,
    today: NaiveDate,
) -> Result<Option<GameState>, StoreError> {
    Ok(store.peek()?.filter(|state| state.date == today))
}

/// Print today's game without creating or changing anything
///
/// # Errors
///
/// Returns `StoreError` if the storage cannot be read.
pub fn run_status<S: Storage>(
    store: &GameStore<S>,
    today: NaiveDate,
) -> Result<(), StoreError> {
    let state = todays_game(store, today)?;
    print_status(state.as_ref());
    Ok(())
}
