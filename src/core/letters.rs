//! Set of lowercase ASCII letters
//!
//! A `LetterSet` packs membership of `'a'..='z'` into the low 26 bits of a `u32`.

use std::fmt;

/// A set of letters `'a'..='z'`
///
/// Iteration always yields letters in alphabetical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self((1 << 26) - 1);

    /// Bit index for a letter, or `None` if it is not `'a'..='z'`
    #[inline]
    const fn index(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some((letter - b'a') as u32)
        } else {
            None
        }
    }

    /// Insert a letter
    ///
    /// Returns `true` if the letter was newly inserted. Bytes outside
    /// `'a'..='z'` are never inserted.
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let Some(idx) = Self::index(letter) else {
            return false;
        };
        let bit = 1 << idx;
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::index(letter) {
            Some(idx) => self.0 & (1 << idx) != 0,
            None => false,
        }
    }

    /// Check if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
