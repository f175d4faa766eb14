//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{LetterSet, Word};

/// English letters from most to least common
pub const ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select an unguessed letter given the words still consistent with the board
    ///
    /// Returns `None` only when every letter has been guessed.
    fn select_letter(&self, candidates: &[&Word], guessed: LetterSet) -> Option<u8>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Random letter among candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &[&Word], guessed: LetterSet) -> Option<u8> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, guessed),
            Self::Random(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Letter-frequency strategy
///
/// Picks the unguessed letter that appears in the most candidates, which
/// maximises the chance of a hit. Ties go to the alphabetically first letter.
/// With no candidates it falls back to general English letter frequency.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&Word], guessed: LetterSet) -> Option<u8> {
        let mut counts = [0_usize; 26];
        for word in candidates {
            for letter in word.letters().difference(guessed).iter() {
                counts[usize::from(letter - b'a')] += 1;
            }
        }

        let best = (b'a'..=b'z')
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            // max_by_key keeps the last maximum; reversing keeps the first
            .rev()
            .max_by_key(|&(_, count)| count)
            .map(|(letter, _)| letter);

        best.or_else(|| {
            ENGLISH_FREQUENCY_ORDER
                .iter()
                .copied()
                .find(|&letter| !guessed.contains(letter))
        })
    }
}

/// Random strategy
///
/// Picks uniformly among unguessed letters that occur in some candidate, or
/// among all unguessed letters if there are no candidates.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, candidates: &[&Word], guessed: LetterSet) -> Option<u8> {
        use rand::prelude::IndexedRandom;

        let useful: LetterSet = candidates
            .iter()
            .flat_map(|w| w.letters().iter())
            .collect();
        let pool = if useful.difference(guessed).is_empty() {
            LetterSet::ALL.difference(guessed)
        } else {
            useful.difference(guessed)
        };

        let letters: Vec<u8> = pool.iter().collect();
        letters.choose(&mut rand::rng()).copied()
    }
}
