//! Hangman - CLI
//!
//! Hangman with TUI and CLI modes, plus a batch simulator for the automatic
//! guesser.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    autoplay::StrategyType,
    commands::{SimulateConfig, run_simple, run_simulation},
    core::{GameRng, RandomSource, ThreadRandom},
    logging::init_logging,
    output::print_simulation_result,
    wordbank::{WordBank, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file with `category: word` lines (default: built-in words)
    #[arg(short = 'w', long, global = true)]
    wordbank: Option<PathBuf>,

    /// Seed for word selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many automatic games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Strategy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

/// Load the embedded bank, or the file given with -w
fn load_bank(path: Option<&Path>) -> Result<WordBank> {
    let Some(path) = path else {
        return Ok(WordBank::embedded());
    };

    let bank = load_from_file(path)
        .with_context(|| format!("failed to load word bank {}", path.display()))?;
    if bank.total_words() == 0 {
        anyhow::bail!("word bank {} has no words", path.display());
    }
    info!(path = %path.display(), words = bank.total_words(), "loaded word bank");
    Ok(bank)
}

/// Seeded rng when --seed is given, thread rng otherwise
fn make_rng(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(GameRng::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(cli.verbose, matches!(command, Commands::Play));

    let bank = load_bank(cli.wordbank.as_deref())?;

    match command {
        Commands::Play => run_play_command(&bank, cli.seed),
        Commands::Simple => run_simple_command(&bank, cli.seed),
        Commands::Simulate { count, strategy } => {
            run_simulate_command(&bank, &strategy, count, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(bank: &WordBank, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(bank, make_rng(seed));
    run_tui(app)
}

fn run_simple_command(bank: &WordBank, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    run_simple(bank, rng.as_mut())
}

fn run_simulate_command(bank: &WordBank, strategy_name: &str, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {count} games (strategy: {strategy_name}, seed: {seed})...");

    let strategy = StrategyType::from_name(strategy_name);
    let result = run_simulation(&strategy, bank, &SimulateConfig::new(count, seed));
    print_simulation_result(&result);
}
