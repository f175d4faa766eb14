//! Formatting utilities for terminal output

use crate::core::{GuessResult, MAX_ATTEMPTS};

/// Gallows drawings indexed by misses (0 = empty gallows, 6 = full figure)
const GALLOWS: [[&str; 7]; 7] = [
    [
        "  +---+  ", "  |   |  ", "      |  ", "      |  ", "      |  ", "      |  ", "========="
    ],
    [
        "  +---+  ", "  |   |  ", "  O   |  ", "      |  ", "      |  ", "      |  ", "========="
    ],
    [
        "  +---+  ", "  |   |  ", "  O   |  ", "  |   |  ", "      |  ", "      |  ", "========="
    ],
    [
        "  +---+  ", "  |   |  ", "  O   |  ", " /|   |  ", "      |  ", "      |  ", "========="
    ],
    [
        "  +---+  ", "  |   |  ", "  O   |  ", " /|\\  |  ", "      |  ", "      |  ", "========="
    ],
    [
        "  +---+  ", "  |   |  ", "  O   |  ", " /|\\  |  ", " /    |  ", "      |  ", "========="
    ],
    [
        "  +---+  ", "  |   |  ", "  O   |  ", " /|\\  |  ", " / \\  |  ", "      |  ", "========="
    ],
];

/// ASCII gallows for the given attempts remaining
///
/// Values above `MAX_ATTEMPTS` draw the empty gallows.
#[must_use]
pub fn gallows(attempts_remaining: u8) -> &'static [&'static str; 7] {
    let misses = MAX_ATTEMPTS.saturating_sub(attempts_remaining);
    &GALLOWS[usize::from(misses.min(MAX_ATTEMPTS))]
}

/// Spread a masked word out for readability: `c??` -> `C ? ?`
#[must_use]
pub fn spaced_word(masked: &str) -> String {
    masked
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short label for a guess result
#[must_use]
pub const fn guess_label(result: GuessResult) -> &'static str {
    match result {
        GuessResult::Hit => "hit",
        GuessResult::Miss => "miss",
        GuessResult::Repeated => "repeat",
        GuessResult::Finished => "ignored",
        GuessResult::Invalid => "invalid",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
