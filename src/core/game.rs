//! Hangman round state machine
//!
//! A `GameState` owns one round at a time: the secret word, the letters guessed
//! so far, the attempts left and the outcome. `start_new_game` resets it in place.

use super::{LetterSet, Word};
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Incorrect guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 6;

/// Status of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// `true` once the round is won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a call to [`GameState::process_guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter is in the secret word
    Hit,
    /// The letter is not in the secret word; one attempt was spent
    Miss,
    /// Already guessed this round, nothing changed
    Repeated,
    /// The round is already over, nothing changed
    Finished,
    /// Not a letter `'a'..='z'`, nothing changed
    Invalid,
}

/// State of a Hangman game
///
/// Generic over the random source used to pick secret words so that callers can
/// inject a seeded generator.
///
/// # Examples
/// ```
/// use hangman::core::{GameState, Outcome};
/// use hangman::wordlists::WordList;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = WordList::from_strs(&["cat"]).unwrap();
/// let mut game = GameState::new(&words, StdRng::seed_from_u64(7));
///
/// game.process_guess('c');
/// assert_eq!(game.masked_word(), "c??");
/// game.process_guess('a');
/// game.process_guess('t');
/// assert_eq!(game.outcome(), Outcome::Won);
/// assert_eq!(game.status_text(), "You won with 6 guesses left!");
/// ```
#[derive(Debug)]
pub struct GameState<'a, R = StdRng> {
    words: &'a WordList,
    rng: R,
    secret: &'a Word,
    guessed: LetterSet,
    attempts_remaining: u8,
    outcome: Outcome,
}

impl<'a> GameState<'a, StdRng> {
    /// Create a game on a standard generator
    ///
    /// With `Some(seed)` the sequence of secret words is reproducible; with
    /// `None` the generator is seeded from the operating system.
    #[must_use]
    pub fn from_seed(words: &'a WordList, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(words, rng)
    }
}

impl<'a, R: Rng> GameState<'a, R> {
    /// Create a game and start its first round
    pub fn new(words: &'a WordList, mut rng: R) -> Self {
        let secret = pick_word(words, &mut rng);
        let game = Self::with_secret(words, secret, rng);
        info!(length = game.secret.len(), "new game started");
        game
    }

    /// Start a new round: pick a random secret word and reset everything else
    pub fn start_new_game(&mut self) {
        self.secret = pick_word(self.words, &mut self.rng);
        self.guessed.clear();
        self.attempts_remaining = MAX_ATTEMPTS;
        self.outcome = Outcome::InProgress;
        info!(length = self.secret.len(), "new game started");
    }
}

impl<'a, R> GameState<'a, R> {
    /// Create a game whose first round uses `secret`
    ///
    /// Later rounds started with `start_new_game` draw from `words` as usual.
    pub fn with_secret(words: &'a WordList, secret: &'a Word, rng: R) -> Self {
        Self {
            words,
            rng,
            secret,
            guessed: LetterSet::EMPTY,
            attempts_remaining: MAX_ATTEMPTS,
            outcome: Outcome::InProgress,
        }
    }

    /// Process a single guessed letter
    ///
    /// Guesses are ignored once the round is over, when the letter was already
    /// guessed, or when it is not a lowercase ASCII letter. After an accepted
    /// guess the win check runs before the loss check, so completing the word
    /// always wins.
    pub fn process_guess(&mut self, letter: char) -> GuessResult {
        if self.outcome.is_over() {
            return GuessResult::Finished;
        }
        if !letter.is_ascii_lowercase() {
            return GuessResult::Invalid;
        }

        let byte = letter as u8;
        if !self.guessed.insert(byte) {
            return GuessResult::Repeated;
        }

        let result = if self.secret.has_letter(byte) {
            GuessResult::Hit
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessResult::Miss
        };
        debug!(%letter, ?result, attempts = self.attempts_remaining, "guess");

        if self.is_word_guessed() {
            self.outcome = Outcome::Won;
        } else if self.attempts_remaining == 0 {
            self.outcome = Outcome::Lost;
        }
        if self.outcome.is_over() {
            info!(outcome = ?self.outcome, word = %self.secret, "round over");
        }

        result
    }

    /// The secret word with unguessed letters replaced by `'?'`
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.secret.mask(self.guessed)
    }

    /// Check if a letter was guessed this round
    #[inline]
    #[must_use]
    pub fn is_letter_guessed(&self, letter: char) -> bool {
        letter.is_ascii() && self.guessed.contains(letter as u8)
    }

    /// Human-readable status line
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::Won => format!("You won with {} guesses left!", self.attempts_remaining),
            Outcome::Lost => format!("You lost! ({})", self.secret),
            Outcome::InProgress => format!("{} guesses left", self.attempts_remaining),
        }
    }

    /// Check if every letter of the secret word has been guessed
    #[inline]
    #[must_use]
    pub const fn is_word_guessed(&self) -> bool {
        self.secret.is_revealed_by(self.guessed)
    }

    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &'a Word {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    /// Guessed letters that are not in the secret word
    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.guessed.difference(self.secret.letters())
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The word list secret words are drawn from
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &'a WordList {
        self.words
    }
}

/// Uniformly random word from a non-empty list
fn pick_word<'a, R: Rng>(words: &'a WordList, rng: &mut R) -> &'a Word {
    let index = rng.random_range(0..words.len());
    &words.as_slice()[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(word: &str) -> WordList {
        WordList::from_strs(&[word]).unwrap()
    }

    fn seeded(words: &WordList) -> GameState<'_> {
        GameState::from_seed(words, Some(42))
    }

    #[test]
    fn new_game_starts_in_progress() {
        let words = WordList::builtin();
        let game = seeded(&words);

        assert!(words.contains(game.secret_word().text()));
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.guessed_letters().is_empty());

        let masked = game.masked_word();
        assert_eq!(masked.len(), game.secret_word().len());
        assert!(masked.chars().all(|c| c == '?'));
    }

    #[test]
    fn start_new_game_picks_from_list_every_time() {
        let words = WordList::builtin();
        let mut game = seeded(&words);

        for _ in 0..50 {
            game.start_new_game();
            assert!(words.contains(game.secret_word().text()));
            assert!(game.masked_word().chars().all(|c| c == '?'));
        }
    }

    #[test]
    fn same_seed_same_words() {
        let words = WordList::builtin();
        let mut a = GameState::from_seed(&words, Some(9));
        let mut b = GameState::from_seed(&words, Some(9));

        for _ in 0..10 {
            assert_eq!(a.secret_word(), b.secret_word());
            a.start_new_game();
            b.start_new_game();
        }
    }

    #[test]
    fn cat_won_without_misses() {
        let words = single("cat");
        let mut game = seeded(&words);

        assert_eq!(game.process_guess('c'), GuessResult::Hit);
        assert_eq!(game.masked_word(), "c??");
        assert_eq!(game.attempts_remaining(), 6);

        assert_eq!(game.process_guess('a'), GuessResult::Hit);
        assert_eq!(game.masked_word(), "ca?");

        assert_eq!(game.process_guess('t'), GuessResult::Hit);
        assert_eq!(game.masked_word(), "cat");
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.status_text(), "You won with 6 guesses left!");
    }

    #[test]
    fn cat_lost_after_six_misses() {
        let words = single("cat");
        let mut game = seeded(&words);

        for (i, letter) in ['x', 'y', 'z', 'q', 'w', 'e'].into_iter().enumerate() {
            assert_eq!(game.outcome(), Outcome::InProgress);
            assert_eq!(game.process_guess(letter), GuessResult::Miss);
            assert_eq!(usize::from(game.attempts_remaining()), 5 - i);
        }

        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.status_text(), "You lost! (cat)");
        assert_eq!(game.wrong_letters().to_string(), "eqwxyz");
    }

    #[test]
    fn in_progress_status() {
        let words = single("cat");
        let mut game = seeded(&words);
        assert_eq!(game.status_text(), "6 guesses left");

        game.process_guess('z');
        assert_eq!(game.status_text(), "5 guesses left");
    }

    #[test]
    fn repeated_guess_is_noop() {
        let words = single("cat");
        let mut game = seeded(&words);

        assert_eq!(game.process_guess('x'), GuessResult::Miss);
        assert_eq!(game.attempts_remaining(), 5);
        assert_eq!(game.process_guess('x'), GuessResult::Repeated);
        assert_eq!(game.attempts_remaining(), 5);

        assert_eq!(game.process_guess('c'), GuessResult::Hit);
        let guessed = game.guessed_letters();
        assert_eq!(game.process_guess('c'), GuessResult::Repeated);
        assert_eq!(game.guessed_letters(), guessed);
    }

    #[test]
    fn attempts_never_increase() {
        let words = single("sycophant");
        let mut game = seeded(&words);
        let mut previous = game.attempts_remaining();

        for letter in "qzsxyjcokvbw".chars() {
            game.process_guess(letter);
            assert!(game.attempts_remaining() <= previous);
            previous = game.attempts_remaining();
        }
    }

    #[test]
    fn guesses_after_win_are_ignored() {
        let words = single("cat");
        let mut game = seeded(&words);
        for letter in ['c', 'a', 't'] {
            game.process_guess(letter);
        }
        assert_eq!(game.outcome(), Outcome::Won);

        let guessed = game.guessed_letters();
        assert_eq!(game.process_guess('z'), GuessResult::Finished);
        assert_eq!(game.guessed_letters(), guessed);
        assert_eq!(game.attempts_remaining(), 6);
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.secret_word().text(), "cat");
    }

    #[test]
    fn guesses_after_loss_are_ignored() {
        let words = single("cat");
        let mut game = seeded(&words);
        for letter in "xyzqwe".chars() {
            game.process_guess(letter);
        }
        assert_eq!(game.outcome(), Outcome::Lost);

        let guessed = game.guessed_letters();
        for letter in ['c', 'a', 't'] {
            assert_eq!(game.process_guess(letter), GuessResult::Finished);
        }
        assert_eq!(game.guessed_letters(), guessed);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.outcome(), Outcome::Lost);
    }

    #[test]
    fn win_on_last_attempt() {
        let words = single("cat");
        let mut game = seeded(&words);
        for letter in "xyzqw".chars() {
            game.process_guess(letter);
        }
        assert_eq!(game.attempts_remaining(), 1);

        game.process_guess('c');
        game.process_guess('a');
        game.process_guess('t');
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.status_text(), "You won with 1 guesses left!");
    }

    #[test]
    fn invalid_input_is_ignored() {
        let words = single("cat");
        let mut game = seeded(&words);

        for letter in ['C', '1', ' ', '?', 'é'] {
            assert_eq!(game.process_guess(letter), GuessResult::Invalid);
        }
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert!(!game.is_letter_guessed('é'));
    }

    #[test]
    fn is_letter_guessed_tracks_hits_and_misses() {
        let words = single("cat");
        let mut game = seeded(&words);
        game.process_guess('a');
        game.process_guess('q');

        assert!(game.is_letter_guessed('a'));
        assert!(game.is_letter_guessed('q'));
        assert!(!game.is_letter_guessed('c'));
    }

    #[test]
    fn start_new_game_resets_mid_round() {
        let words = single("cat");
        let mut game = seeded(&words);
        game.process_guess('c');
        game.process_guess('x');
        game.process_guess('y');

        game.start_new_game();
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.masked_word(), "???");
    }

    #[test]
    fn start_new_game_resets_after_loss() {
        let words = single("cat");
        let mut game = seeded(&words);
        for letter in "xyzqwe".chars() {
            game.process_guess(letter);
        }
        game.start_new_game();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.process_guess('c'), GuessResult::Hit);
    }

    #[test]
    fn with_secret_uses_given_word() {
        let words = WordList::builtin();
        let secret = Word::new("obdurate").unwrap();
        let mut game = GameState::with_secret(&words, &secret, StdRng::seed_from_u64(1));

        assert_eq!(game.masked_word(), "????????");
        game.process_guess('o');
        assert_eq!(game.masked_word(), "o???????");
    }

    #[test]
    fn repeated_letters_revealed_together() {
        let words = single("insipid");
        let mut game = seeded(&words);
        game.process_guess('i');
        assert_eq!(game.masked_word(), "i??i?i?");
    }
}
