//! Interactive TUI interface

mod app;
pub mod input;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use input::{KeyAction, KeyHitbox, VirtualKey, key_action, keyboard_layout, mouse_action};
