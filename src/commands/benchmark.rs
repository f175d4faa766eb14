//! Benchmark command
//!
//! Auto-plays every word of the list and collects win/miss statistics.

use super::solve::play_round;
use crate::core::{MAX_ATTEMPTS, Outcome};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub average_misses: f64,
    /// Rounds keyed by number of misses
    pub miss_distribution: FxHashMap<usize, usize>,
    /// Lost words plus won words with the most misses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Run the solver on the first `limit` words of its list (all by default)
///
/// Rounds are independent and run in parallel.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    limit: Option<usize>,
) -> BenchmarkResult {
    let words = solver.words().as_slice();
    let test_words = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let rounds: Vec<(String, Outcome, usize)> = test_words
        .par_iter()
        .map(|word| {
            let result = play_round(word, solver);
            pb.inc(1);
            (result.target.clone(), result.outcome, result.misses())
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(rounds, duration);
    info!(
        words = result.total_words,
        won = result.won,
        average_misses = result.average_misses,
        "benchmark finished"
    );
    result
}

fn summarize(rounds: Vec<(String, Outcome, usize)>, duration: Duration) -> BenchmarkResult {
    let total_words = rounds.len();
    let won = rounds
        .iter()
        .filter(|(_, outcome, _)| *outcome == Outcome::Won)
        .count();

    let mut miss_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for (_, _, misses) in &rounds {
        *miss_distribution.entry(*misses).or_insert(0) += 1;
    }

    let total_misses: usize = rounds.iter().map(|(_, _, misses)| misses).sum();
    let average_misses = if total_words > 0 {
        total_misses as f64 / total_words as f64
    } else {
        0.0
    };

    let mut hardest_words: Vec<(String, usize)> = rounds
        .into_iter()
        .filter(|(_, _, misses)| *misses >= usize::from(MAX_ATTEMPTS / 2))
        .map(|(word, _, misses)| (word, misses))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    BenchmarkResult {
        total_words,
        won,
        lost: total_words - won,
        average_misses,
        miss_distribution,
        hardest_words,
        duration,
    }
}
