//! TUI rendering with ratatui
//!
//! Gallows, masked word, alphabet and message log.

use super::app::{App, MessageStyle};
use crate::core::{GameState, MAX_ATTEMPTS, Outcome};
use crate::output::formatters::{gallows, spaced_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(21), // Gallows
            Constraint::Min(30),    // Board
        ])
        .split(chunks[1]);

    render_gallows(f, &app.game, main_chunks[0]);
    render_board(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

fn render_gallows<R>(f: &mut Frame, game: &GameState<'_, R>, area: Rect) {
    let color = match game.outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::White,
    };
    let lines: Vec<Line> = gallows(game.attempts_remaining())
        .iter()
        .map(|&line| Line::from(line))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Word, status, alphabet
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    let game = &app.game;
    let status_color = match game.outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::White,
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_word(&game.masked_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            game.status_text(),
            Style::default().fg(status_color),
        )),
        Line::from(""),
        alphabet_line(game),
    ];
    if let Some(hint) = app.hint {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("Hint: {hint}"),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, chunks[0]);

    let attempts = game.attempts_remaining();
    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(gauge_color(attempts)))
        .percent(u16::from(attempts) * 100 / u16::from(MAX_ATTEMPTS))
        .label(format!("{attempts}/{MAX_ATTEMPTS}"));
    f.render_widget(gauge, chunks[1]);
}

/// Alphabet with hits green, misses red and unguessed letters dim
fn alphabet_line<'l, R>(game: &GameState<'_, R>) -> Line<'l> {
    let secret = game.secret_word();
    let spans: Vec<Span> = ('a'..='z')
        .flat_map(|letter| {
            let style = if !game.is_letter_guessed(letter) {
                Style::default().fg(Color::DarkGray)
            } else if secret.has_letter(letter as u8) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            [Span::styled(letter.to_string(), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

const fn gauge_color(attempts: u8) -> Color {
    match attempts {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    }
}

fn render_messages<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
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

fn render_status<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("a-z: Guess | Enter: New Game | Tab: Hint | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
