//! Hangman - CLI
//!
//! Terminal Hangman with TUI and line-based modes, plus solver commands.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_benchmark, run_simple, solve_word},
    core::GameState,
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
    wordlists::{WordList, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows fill up",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hint/solver strategy: frequency (default), random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'builtin' (default, 10 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for secret word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (level from `RUST_LOG`, default info)
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let the solver play a specific word from the list
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Let the solver play every word in the list
    Benchmark {
        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "builtin" => Ok(WordList::builtin()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            WordList::new(words).with_context(|| format!("Unusable word list '{path}'"))
        }
    }
}

/// Log to a file; a TUI can't share the terminal with log output
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let words = load_wordlist(&cli.wordlist)?;
    let solver = Solver::new(StrategyType::from_name(&cli.strategy), &words);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use hangman::interactive::{App, run_tui};

            let game = GameState::from_seed(&words, cli.seed);
            run_tui(App::new(game, solver))
        }
        Commands::Simple => {
            let mut game = GameState::from_seed(&words, cli.seed);
            run_simple(std::io::stdin().lock(), &mut game, &solver).map_err(|e| anyhow!(e))
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, &solver).map_err(|e| anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { limit } => {
            println!(
                "Running {} strategy on {} words...",
                solver.strategy().name(),
                limit.unwrap_or(words.len()).min(words.len())
            );
            let result = run_benchmark(&solver, limit);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
