//! TUI application state and logic

use crate::core::{GameState, GuessResult, Outcome};
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::Rng;
use rand::rngs::StdRng;
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a, R = StdRng> {
    pub game: GameState<'a, R>,
    pub solver: Solver<'a, StrategyType>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub hint: Option<char>,
    pub should_quit: bool,
}

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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(game: GameState<'a, R>, solver: Solver<'a, StrategyType>) -> Self {
        Self {
            game,
            solver,
            messages: vec![
                Message {
                    text: "Welcome! Type letters to guess the secret word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter: new game | Tab: hint | Esc: quit".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            hint: None,
            should_quit: false,
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.new_game(),
            KeyCode::Tab => self.show_hint(),
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                self.guess(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    /// Guess a letter and report what happened
    pub fn guess(&mut self, letter: char) {
        let was_over = self.game.outcome().is_over();
        let result = self.game.process_guess(letter);
        self.hint = None;

        match result {
            GuessResult::Hit => {
                self.add_message(&format!("'{letter}' is in the word"), MessageStyle::Success);
            }
            GuessResult::Miss => {
                self.add_message(&format!("No '{letter}'"), MessageStyle::Error);
            }
            GuessResult::Repeated => {
                self.add_message(&format!("'{letter}' already guessed"), MessageStyle::Info);
            }
            GuessResult::Finished => {
                self.add_message("Round over. Press Enter for a new game.", MessageStyle::Info);
            }
            GuessResult::Invalid => {}
        }

        if !was_over && self.game.outcome().is_over() {
            self.record_outcome();
        }
    }

    fn record_outcome(&mut self) {
        self.stats.total_games += 1;
        let style = if self.game.outcome() == Outcome::Won {
            self.stats.games_won += 1;
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        debug!(
            games = self.stats.total_games,
            won = self.stats.games_won,
            "round recorded"
        );

        self.add_message(&self.game.status_text(), style);
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.start_new_game();
        self.hint = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn show_hint(&mut self) {
        match self.solver.next_letter(&self.game) {
            Some(letter) => {
                self.hint = Some(letter);
                let candidates = self
                    .solver
                    .count_candidates(&self.game.masked_word(), self.game.guessed_letters());
                self.add_message(
                    &format!("Hint: try '{letter}' ({candidates} candidate words)"),
                    MessageStyle::Info,
                );
            }
            None => self.add_message("No hint available", MessageStyle::Error),
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
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::WordList;

    fn app(words: &WordList) -> App<'_> {
        let game = GameState::from_seed(words, Some(5));
        let solver = Solver::new(StrategyType::Frequency(FrequencyStrategy), words);
        App::new(game, solver)
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn letters_are_guessed_lowercase() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);

        press(&mut app, KeyCode::Char('C'));
        assert!(app.game.is_letter_guessed('c'));
        assert_eq!(app.game.masked_word(), "c??");
    }

    #[test]
    fn winning_updates_statistics_once() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);

        for c in ['c', 'a', 't', 'x'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game.outcome(), Outcome::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn losing_updates_statistics() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);

        for c in "qwerxy".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game.outcome(), Outcome::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You lost! (cat)" && m.style == MessageStyle::Error)
        );
    }

    #[test]
    fn enter_starts_new_game() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);
        press(&mut app, KeyCode::Char('z'));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.attempts_remaining(), MAX_ATTEMPTS);
        assert!(app.game.guessed_letters().is_empty());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn ctrl_n_starts_new_game_and_is_not_a_guess() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);
        press(&mut app, KeyCode::Char('z'));

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(!app.game.is_letter_guessed('n'));
        assert_eq!(app.game.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn quit_keys() {
        let words = WordList::builtin();

        let mut a = app(&words);
        press(&mut a, KeyCode::Esc);
        assert!(a.should_quit);

        let mut b = app(&words);
        b.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(b.should_quit);
        assert!(b.game.guessed_letters().is_empty());
    }

    #[test]
    fn tab_shows_hint() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);

        press(&mut app, KeyCode::Tab);
        let hint = app.hint.unwrap();
        assert!("cat".contains(hint));

        press(&mut app, KeyCode::Char(hint));
        assert!(app.hint.is_none());
    }

    #[test]
    fn non_letters_ignored() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);

        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Backspace);
        assert!(app.game.guessed_letters().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn release_events_ignored() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut app = app(&words);

        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(!app.game.is_letter_guessed('c'));
    }

    #[test]
    fn messages_capped_at_five() {
        let words = WordList::builtin();
        let mut app = app(&words);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
