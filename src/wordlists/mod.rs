//! Word lists for Hangman
//!
//! Provides the embedded secret words and the non-empty `WordList` type.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::{WordList, WordListError};
