//! Display functions for the line-based commands

use super::formatters::{create_progress_bar, gallows, guess_label, spaced_word};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{GameState, GuessResult, MAX_ATTEMPTS, Outcome};
use colored::Colorize;

/// Print the gallows, masked word, alphabet and status of a round
pub fn print_board<R>(game: &GameState<'_, R>) {
    println!();
    for line in gallows(game.attempts_remaining()) {
        println!("    {line}");
    }
    println!();
    println!("    {}", spaced_word(&game.masked_word()).bright_white().bold());
    println!("    {}", alphabet(game));
    println!("    {}", game.status_text().bright_cyan());
    println!();
}

/// Alphabet with guessed letters highlighted
fn alphabet<R>(game: &GameState<'_, R>) -> String {
    ('a'..='z')
        .map(|letter| {
            let text = letter.to_string();
            if game.is_letter_guessed(letter) {
                text.blue().bold().to_string()
            } else {
                text.bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the end-of-round banner
pub fn print_round_over<R>(game: &GameState<'_, R>) {
    println!("{}", "═".repeat(60).bright_cyan());
    match game.outcome() {
        Outcome::Won => println!("  🎉 {}", game.status_text().bright_green().bold()),
        Outcome::Lost => println!("  💀 {}", game.status_text().red().bold()),
        Outcome::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print the result of auto-playing a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let label = match step.result {
            GuessResult::Hit => guess_label(step.result).green(),
            _ => guess_label(step.result).red(),
        };
        println!(
            "\nTurn {}: '{}' {:<4} {}",
            i + 1,
            step.letter,
            label,
            spaced_word(&step.masked)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        Outcome::Won => println!("{}", format!("✅ {}", result.status).green().bold()),
        Outcome::Lost => println!("{}", format!("❌ {}", result.status).red().bold()),
        Outcome::InProgress => println!("{}", result.status),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Won:              {} {}",
        result.won,
        format!("({:.1}%)", result.win_rate()).green()
    );
    if result.lost > 0 {
        println!("   Lost:             {}", result.lost.to_string().red());
    }
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Miss Distribution:".bright_cyan().bold());
    for misses in 0..=usize::from(MAX_ATTEMPTS) {
        let count = result.miss_distribution.get(&misses).copied().unwrap_or(0);
        let pct = if result.total_words > 0 {
            count as f64 / result.total_words as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {misses}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, misses) in result.hardest_words.iter().take(5) {
            println!("   {} ({} misses)", word.to_uppercase().yellow(), misses);
        }
    }
}
