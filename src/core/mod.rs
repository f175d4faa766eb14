//! Core domain types for Hangman
//!
//! Words, letter sets and the round state machine. Everything here is pure
//! apart from the random word choice, whose source is injected by the caller.

mod game;
mod letters;
mod word;

pub use game::{GameState, GuessResult, MAX_ATTEMPTS, Outcome};
pub use letters::LetterSet;
pub use word::{Word, WordError};
