//! Non-empty list of secret words

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered, deduplicated, non-empty list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList(Vec<Word>);

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

impl WordList {
    /// Build a list, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self(words))
    }

    /// Build a list from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no entry is a valid word.
    pub fn from_strs(words: &[&str]) -> Result<Self, WordListError> {
        Self::new(words_from_slice(words))
    }

    /// The list compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the build script rejects an empty word file.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_strs(WORDS).expect("embedded word list is non-empty")
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }

    /// Find a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.0.iter().find(|w| w.text() == text)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
