//! Simple interactive CLI mode
//!
//! Line-based Hangman without the TUI

use crate::core::{GameState, GuessResult};
use crate::output::{print_board, print_round_over};
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Hint,
    /// Letters to guess, in order
    Guess(Vec<char>),
    Empty,
}

impl Command {
    /// Parse one line of input
    ///
    /// Words `quit`, `new` and `hint` (and their first letters prefixed with
    /// `:`) are commands; anything else is a run of guesses, lowercased, with
    /// non-letters dropped.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "" => Self::Empty,
            "quit" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::NewGame,
            "hint" | ":h" => Self::Hint,
            _ => {
                let letters: Vec<char> = line.chars().filter(char::is_ascii_lowercase).collect();
                if letters.is_empty() {
                    Self::Empty
                } else {
                    Self::Guess(letters)
                }
            }
        }
    }
}

/// Run the simple interactive CLI mode, reading lines from `input`
///
/// Returns when the player quits, declines another round, or input ends.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<B: BufRead, R: Rng, S: Strategy>(
    input: B,
    game: &mut GameState<'_, R>,
    solver: &Solver<S>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Hangman - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type one or more letters and press Enter to guess them.");
    println!("Commands: 'new' for a new game, 'hint' for a suggestion, 'quit' to exit\n");

    let mut lines = input.lines();

    loop {
        print_board(game);

        if game.outcome().is_over() {
            print_round_over(game);
            match prompt(&mut lines, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game.start_new_game();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = prompt(&mut lines, "Guess")? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::NewGame => {
                game.start_new_game();
                println!("\n🔄 New game started!\n");
            }
            Command::Hint => match solver.next_letter(game) {
                Some(letter) => println!("💡 Try '{}'", letter.to_string().bright_yellow().bold()),
                None => println!("No hint available"),
            },
            Command::Guess(letters) => apply_guesses(game, &letters),
            Command::Empty => {}
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Apply letters in order, reporting repeats; stops once the round ends
pub fn apply_guesses<R>(game: &mut GameState<'_, R>, letters: &[char]) {
    for &letter in letters {
        match game.process_guess(letter) {
            GuessResult::Repeated => {
                println!("{}", format!("'{letter}' was already guessed").bright_black());
            }
            GuessResult::Finished => break,
            GuessResult::Hit | GuessResult::Miss | GuessResult::Invalid => {}
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Result<Option<String>, String> {
    print!("{text}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    match lines.next() {
        Some(line) => Ok(Some(line.map_err(|e| e.to_string())?.trim().to_lowercase())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_ATTEMPTS, Outcome};
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn play<'a>(words: &'a WordList, input: &str) -> (GameState<'a>, Result<(), String>) {
        let mut game = GameState::from_seed(words, Some(1));
        let solver = Solver::new(FrequencyStrategy, words);
        let result = run_simple(Cursor::new(input.to_string()), &mut game, &solver);
        (game, result)
    }

    #[test]
    fn yes_after_win_starts_new_round() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        // Win, accept another round, guess once, then input ends
        let (game, result) = play(&words, "cat\ny\nz\n");

        assert!(result.is_ok());
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.is_letter_guessed('z'));
        assert!(!game.is_letter_guessed('c'));
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn no_after_loss_ends_session() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let (game, result) = play(&words, "xyzqwe\nno\nc\n");

        assert!(result.is_ok());
        assert_eq!(game.outcome(), Outcome::Lost);
        assert!(!game.is_letter_guessed('c'));
    }

    #[test]
    fn end_of_input_ends_session() {
        let words = WordList::from_strs(&["cat"]).unwrap();

        let (game, result) = play(&words, "");
        assert!(result.is_ok());
        assert!(game.guessed_letters().is_empty());

        // EOF at the play-again prompt
        let (game, result) = play(&words, "cat\n");
        assert!(result.is_ok());
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn new_mid_round_resets_attempts() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let (game, result) = play(&words, "xy\nnew\n");

        assert!(result.is_ok());
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert!(game.guessed_letters().is_empty());
    }

    #[test]
    fn quit_stops_reading() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let (game, result) = play(&words, "quit\nc\n");

        assert!(result.is_ok());
        assert!(!game.is_letter_guessed('c'));
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("  NEW "), Command::NewGame);
        assert_eq!(Command::parse(":h"), Command::Hint);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("123 !"), Command::Empty);
    }

    #[test]
    fn parse_guesses() {
        assert_eq!(Command::parse("a"), Command::Guess(vec!['a']));
        assert_eq!(Command::parse("E t-A"), Command::Guess(vec!['e', 't', 'a']));
    }

    #[test]
    fn apply_guesses_stops_after_round_ends() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut game = GameState::from_seed(&words, Some(1));

        apply_guesses(&mut game, &['c', 'a', 't', 'z']);
        assert_eq!(game.outcome(), Outcome::Won);
        assert!(!game.is_letter_guessed('z'));
    }

    #[test]
    fn apply_guesses_counts_misses() {
        let words = WordList::from_strs(&["cat"]).unwrap();
        let mut game = GameState::from_seed(&words, Some(1));

        apply_guesses(&mut game, &['x', 'x', 'y']);
        assert_eq!(game.attempts_remaining(), 4);
    }
}
