//! Word solving command
//!
//! Auto-plays one round against a chosen secret word and records every step.

use crate::core::{GameState, GuessResult, Outcome, Word};
use crate::solver::{Solver, Strategy};
use tracing::info;

/// Result of auto-playing a word
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<GuessStep>,
    pub outcome: Outcome,
    pub attempts_remaining: u8,
    pub status: String,
}

impl SolveResult {
    /// Number of guesses that missed
    #[must_use]
    pub fn misses(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.result == GuessResult::Miss)
            .count()
    }
}

/// A single guess in the round
pub struct GuessStep {
    pub letter: char,
    pub result: GuessResult,
    pub masked: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a word from the solver's word list
///
/// # Errors
///
/// Returns an error if the target is not a valid word or is not in the word list.
pub fn solve_word<S: Strategy>(target: &str, solver: &Solver<S>) -> Result<SolveResult, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let secret = solver
        .words()
        .find(target_word.text())
        .ok_or_else(|| format!("Word '{target_word}' not in word list"))?;

    let result = play_round(secret, solver);
    info!(
        word = %secret,
        outcome = ?result.outcome,
        misses = result.misses(),
        "solved"
    );
    Ok(result)
}

/// Auto-play a full round on `secret`
pub fn play_round<S: Strategy>(secret: &Word, solver: &Solver<S>) -> SolveResult {
    let mut game = GameState::with_secret(solver.words(), secret, rand::rng());
    let mut steps = Vec::new();

    while let Some(letter) = solver.next_letter(&game) {
        let guessed = game.guessed_letters();
        let candidates_before = solver.count_candidates(&game.masked_word(), guessed);

        let result = game.process_guess(letter);

        let masked = game.masked_word();
        let candidates_after = solver.count_candidates(&masked, game.guessed_letters());
        steps.push(GuessStep {
            letter,
            result,
            masked,
            candidates_before,
            candidates_after,
        });
    }

    SolveResult {
        target: secret.text().to_string(),
        steps,
        outcome: game.outcome(),
        attempts_remaining: game.attempts_remaining(),
        status: game.status_text(),
    }
}
