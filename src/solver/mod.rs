//! Hangman solving
//!
//! Candidate filtering and letter selection strategies.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
