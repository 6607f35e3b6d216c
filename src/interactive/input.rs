//! Key and mouse handling for the TUI

use crate::game::InputEvent;
use crate::output::formatters::KEYBOARD_ROWS;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// What a key press means to the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the game session
    Game(InputEvent),
    Quit,
    Ignore,
}

/// Map a key press to a game event or a front-end action
///
/// Only single ASCII letters, Enter, Backspace and Delete reach the game.
#[must_use]
pub fn key_action(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Game(InputEvent::Submit),
        KeyCode::Backspace | KeyCode::Delete => KeyAction::Game(InputEvent::DeleteLast),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            KeyAction::Game(InputEvent::Letter(c.to_ascii_lowercase()))
        }
        _ => KeyAction::Ignore,
    }
}

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKey {
    Letter(u8),
    Enter,
    Delete,
}

impl VirtualKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter.to_ascii_uppercase()).to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    /// The game event a click on this key sends
    #[must_use]
    pub fn event(self) -> InputEvent {
        match self {
            Self::Letter(letter) => InputEvent::Letter(char::from(letter)),
            Self::Enter => InputEvent::Submit,
            Self::Delete => InputEvent::DeleteLast,
        }
    }

    /// Cell width including one column of padding each side
    #[must_use]
    pub fn width(self) -> u16 {
        match self {
            Self::Letter(_) => 3,
            Self::Enter => 7,
            Self::Delete => 5,
        }
    }
}

/// Rows of the on-screen keyboard; ENTER and DEL flank the bottom row
#[must_use]
pub fn virtual_rows() -> Vec<Vec<VirtualKey>> {
    let last = KEYBOARD_ROWS.len() - 1;
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut keys: Vec<VirtualKey> = row.bytes().map(VirtualKey::Letter).collect();
            if i == last {
                keys.insert(0, VirtualKey::Enter);
                keys.push(VirtualKey::Delete);
            }
            keys
        })
        .collect()
}

/// Where a key was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHitbox {
    pub key: VirtualKey,
    pub area: Rect,
}

/// Lay the on-screen keyboard out inside `area`
///
/// One line per row, keys separated by a blank column, each row centred.
/// Rows or keys that do not fit are left out.
#[must_use]
pub fn keyboard_layout(area: Rect) -> Vec<KeyHitbox> {
    let mut hitboxes = Vec::new();

    for (offset, row) in (0..area.height).zip(virtual_rows()) {
        let row_width: u16 = row.iter().map(|key| key.width() + 1).sum::<u16>() - 1;
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for key in row {
            let width = key.width();
            if x + width > area.right() {
                break;
            }
            hitboxes.push(KeyHitbox {
                key,
                area: Rect::new(x, area.y + offset, width, 1),
            });
            x += width + 1;
        }
    }

    hitboxes
}

/// The key drawn at a terminal cell, if any
#[must_use]
pub fn key_at(hitboxes: &[KeyHitbox], column: u16, row: u16) -> Option<VirtualKey> {
    let position = Position::new(column, row);
    hitboxes
        .iter()
        .find(|hitbox| hitbox.area.contains(position))
        .map(|hitbox| hitbox.key)
}

/// Map a mouse event to a game event
///
/// Only a left-button press on an on-screen key counts.
#[must_use]
pub fn mouse_action(mouse: MouseEvent, hitboxes: &[KeyHitbox]) -> KeyAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => key_at(hitboxes, mouse.column, mouse.row)
            .map_or(KeyAction::Ignore, |key| KeyAction::Game(key.event())),
        _ => KeyAction::Ignore,
    }
}
