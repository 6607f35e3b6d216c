//! TUI application state and logic

use super::input::{KeyAction, KeyHitbox, key_action, mouse_action};
use crate::game::{InputEvent, Notice, Session};
use crate::storage::Storage;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S: Storage> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// On-screen keys from the last frame
    pub keys: Vec<KeyHitbox>,
}

impl<S: Storage> App<S> {
    #[must_use]
    pub fn new(session: Session<S>, start_notice: Option<Notice>) -> Self {
        let practice = session.is_practice();
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
            keys: Vec::new(),
        };

        match start_notice {
            Some(notice) => app.show_notice(&notice),
            None if practice => {
                app.add_message("Practice game: a random word, not saved", MessageStyle::Info);
            }
            None => app.add_message(
                "Guess today's word! Type letters, Enter to submit",
                MessageStyle::Info,
            ),
        }

        app
    }

    /// Forward a game event to the session and report what happened
    pub fn handle_event(&mut self, event: InputEvent) {
        match self.session.handle(event) {
            Ok(Some(notice)) => self.show_notice(&notice),
            Ok(None) => {}
            Err(err) => {
                error!(error = %err, "failed to save guess");
                self.add_message(
                    &format!("Could not save your guess: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Apply a front-end action from a key or a click
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Game(event) => self.handle_event(event),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }
    }

    fn show_notice(&mut self, notice: &Notice) {
        let style = match notice {
            Notice::Won(_) => MessageStyle::Success,
            Notice::Lost(_) | Notice::NotEnoughLetters | Notice::InvalidWord(_) => {
                MessageStyle::Error
            }
            Notice::AlreadyFinished(_) => MessageStyle::Info,
        };
        self.add_message(&notice.to_string(), style);

        if notice.ends_game() {
            self.add_message("Press 'q' or Esc to quit", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "TUI exited with an error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    info!("TUI started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key_action(key) {
                    KeyAction::Quit => app.should_quit = true,
                    // Once the game is over 'q' quits instead of typing
                    _ if !app.session.is_accepting() && key.code == KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyAction::Game(event) => app.handle_event(event),
                    KeyAction::Ignore => {}
                }
            }
            Event::Mouse(mouse) => app.handle_action(mouse_action(mouse, &app.keys)),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
