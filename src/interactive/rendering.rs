//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message log for the game.

use super::app::{App, MessageStyle};
use super::input::{KeyHitbox, VirtualKey, keyboard_layout};
use crate::core::{LetterFeedback, MAX_ATTEMPTS};
use crate::game::{GameStatus, Tile, TileState};
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
///
/// Records where the on-screen keys were drawn so clicks can be mapped back.
pub fn ui<S: Storage>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    app.keys = render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = if app.session.is_practice() {
        "🎯 DAILY WORDLE - Practice".to_string()
    } else {
        format!("🎯 DAILY WORDLE - {}", app.session.state().date)
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background colour for a feedback state
const fn feedback_color(state: LetterFeedback) -> Color {
    match state {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    let text = format!(" {} ", tile.letter.map_or(' ', |c| c.to_ascii_uppercase()));
    let style = match tile.state {
        TileState::Empty => Style::default().bg(Color::Rgb(40, 40, 40)),
        TileState::Filled => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(70, 70, 70))
            .add_modifier(Modifier::BOLD),
        TileState::Scored(state) => Style::default()
            .fg(Color::Black)
            .bg(feedback_color(state))
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(text, style)
}

fn render_board<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in app.session.tiles() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for tile in row {
            spans.push(tile_span(tile));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) -> Vec<KeyHitbox> {
    let block = Block::default()
        .title(" Keyboard (click or type) ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let keyboard = app.session.keyboard();
    let hitboxes = keyboard_layout(inner);
    for hitbox in &hitboxes {
        let style = match hitbox.key {
            VirtualKey::Letter(letter) => keyboard.state(letter).map_or_else(
                || Style::default().fg(Color::White).bg(Color::Rgb(60, 60, 60)),
                |state| {
                    Style::default()
                        .fg(Color::Black)
                        .bg(feedback_color(state))
                },
            ),
            VirtualKey::Enter | VirtualKey::Delete => Style::default()
                .fg(Color::Cyan)
                .bg(Color::Rgb(60, 60, 60))
                .add_modifier(Modifier::BOLD),
        };
        let label = Paragraph::new(hitbox.key.label())
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(label, hitbox.area);
    }

    hitboxes
}

fn render_messages<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.session.state();
    let (status_text, status_color) = match state.status {
        GameStatus::InProgress => ("Playing", Color::Yellow),
        GameStatus::Won => ("Won", Color::Green),
        GameStatus::Lost => ("Lost", Color::Red),
    };
    let status = Paragraph::new(format!("Status: {status_text}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color));
    f.render_widget(status, chunks[0]);

    let attempts = Paragraph::new(format!(
        "Attempts left: {}/{MAX_ATTEMPTS}",
        app.session.attempts_remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let help_text = if app.session.is_accepting() {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    } else {
        "q/Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
