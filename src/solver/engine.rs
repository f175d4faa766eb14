//! Main Hangman solver interface

use super::strategy::Strategy;
use crate::core::{GameState, LetterSet, Word};
use crate::wordlists::WordList;

/// Hangman solver
///
/// Narrows the word list down to the words consistent with the board and
/// asks its strategy for the next letter.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a WordList,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    pub const fn new(strategy: S, words: &'a WordList) -> Self {
        Self { strategy, words }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn words(&self) -> &'a WordList {
        self.words
    }

    /// Suggest the next letter for a round in progress
    ///
    /// Returns `None` once the round is over.
    pub fn next_letter<R>(&self, game: &GameState<'_, R>) -> Option<char> {
        if game.outcome().is_over() {
            return None;
        }

        let guessed = game.guessed_letters();
        let candidates = self.candidates(&game.masked_word(), guessed);
        self.strategy
            .select_letter(&candidates, guessed)
            .map(char::from)
    }

    /// Words consistent with a masked word and the guessed letters
    ///
    /// A word fits when it has the same length and, position by position,
    /// either shows the revealed letter or holds a letter not yet guessed.
    pub fn candidates(&self, masked: &str, guessed: LetterSet) -> Vec<&'a Word> {
        self.words
            .iter()
            .filter(|word| fits(word, masked, guessed))
            .collect()
    }

    /// Count how many words fit the board
    pub fn count_candidates(&self, masked: &str, guessed: LetterSet) -> usize {
        self.candidates(masked, guessed).len()
    }
}

fn fits(word: &Word, masked: &str, guessed: LetterSet) -> bool {
    word.len() == masked.len()
        && word
            .bytes()
            .iter()
            .zip(masked.bytes())
            .all(|(&letter, shown)| {
                if shown == b'?' {
                    !guessed.contains(letter)
                } else {
                    letter == shown
                }
            })
}
