//! The game engine
//!
//! Daily word selection, guess validation, saved state and the session
//! controller that ties them together.

pub mod context;
pub mod input;
pub mod selector;
pub mod session;
pub mod state;
pub mod store;
pub mod validator;

pub use context::{GameContext, StartupError};
pub use input::{InputEvent, InputRow};
pub use selector::{ConfigurationError, date_hash, select_daily_word, select_random_word};
pub use session::{Notice, Session, Tile, TileState};
pub use state::{GameState, GameStatus, StateError};
pub use store::{GAME_KEY, GameStore, StoreError};
pub use validator::{ValidationError, validate};
