//! Simulation command
//!
//! Plays many seeded games with an automatic strategy and aggregates the
//! results.

use crate::autoplay::Strategy;
use crate::core::{Category, GameRng, GameSession, RandomSource, Status};
use crate::wordbank::WordBank;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// Result of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub category: Category,
    pub word: String,
    pub won: bool,
    pub wrong: u32,
    pub guesses: usize,
}

/// Aggregate result of a simulation run
pub struct SimulationResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub average_wrong: f64,
    pub average_guesses: f64,
    /// Wrong guesses per game → number of games
    pub distribution: HashMap<u32, usize>,
    /// Category → (won, played)
    pub by_category: HashMap<Category, (usize, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    /// Fraction of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.won as f64 / self.total_games as f64
        }
    }

    /// Largest wrong-guess count seen
    #[must_use]
    pub fn max_wrong(&self) -> u32 {
        self.distribution.keys().copied().max().unwrap_or(0)
    }
}

/// Play one game from a seed
///
/// The seed picks both the category and the word. Returns `None` if the bank
/// is empty.
pub fn simulate_game<S: Strategy + ?Sized>(
    strategy: &S,
    bank: &WordBank,
    seed: u64,
) -> Option<GameResult> {
    let mut rng = GameRng::new(seed);
    let categories: Vec<Category> = bank.categories().collect();
    if categories.is_empty() {
        return None;
    }
    let category = categories[rng.pick(categories.len())];

    let mut session = GameSession::new();
    session.select_category(bank, category, &mut rng).ok()?;

    let mut guesses = 0;
    while let Some(guess) = strategy.next_guess(&session, bank, &mut rng) {
        if guess.apply(&mut session).is_err() {
            break;
        }
        guesses += 1;
    }

    let result = GameResult {
        category,
        word: session.secret()?.text().to_string(),
        won: session.status() == Status::Won,
        wrong: session.wrong_count(),
        guesses,
    };
    debug!(seed, word = %result.word, won = result.won, "simulated game");
    Some(result)
}

/// Run a batch of games in parallel
///
/// Game `i` uses seed `config.seed + i`, so a run is reproducible.
pub fn run_simulation<S: Strategy + Sync>(
    strategy: &S,
    bank: &WordBank,
    config: &SimulateConfig,
) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<GameResult> = (0..config.games)
        .into_par_iter()
        .filter_map(|i| {
            let result = simulate_game(strategy, bank, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("done");

    let summary = summarize(&results, start.elapsed());
    info!(
        games = summary.total_games,
        won = summary.won,
        "simulation finished"
    );
    summary
}

fn summarize(results: &[GameResult], duration: Duration) -> SimulationResult {
    let total_games = results.len();
    let won = results.iter().filter(|r| r.won).count();

    let mut distribution: HashMap<u32, usize> = HashMap::new();
    let mut by_category: HashMap<Category, (usize, usize)> = HashMap::new();
    for result in results {
        *distribution.entry(result.wrong).or_insert(0) += 1;
        let entry = by_category.entry(result.category).or_insert((0, 0));
        entry.0 += usize::from(result.won);
        entry.1 += 1;
    }

    let (average_wrong, average_guesses) = if total_games == 0 {
        (0.0, 0.0)
    } else {
        let wrong: u32 = results.iter().map(|r| r.wrong).sum();
        let guesses: usize = results.iter().map(|r| r.guesses).sum();
        (
            f64::from(wrong) / total_games as f64,
            guesses as f64 / total_games as f64,
        )
    };

    SimulationResult {
        total_games,
        won,
        lost: total_games - won,
        average_wrong,
        average_guesses,
        distribution,
        by_category,
        duration,
        games_per_second: if duration.as_secs_f64() > 0.0 {
            total_games as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
