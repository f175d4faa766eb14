//! Hangman
//!
//! A terminal Hangman game with a letter-frequency solver.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, Outcome};
//! use hangman::wordlists::WordList;
//!
//! let words = WordList::builtin();
//! let mut game = GameState::from_seed(&words, Some(42));
//!
//! for letter in "etaoinshrdlu".chars() {
//!     game.process_guess(letter);
//! }
//! println!("{} - {}", game.masked_word(), game.status_text());
//! assert!(game.attempts_remaining() <= 6);
//! ```

// Core domain types
pub mod core;

// Letter suggestion
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
