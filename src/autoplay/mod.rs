//! Automatic guessing strategies
//!
//! Used by the `simulate` command and by the TUI hint key.

mod strategy;

pub use strategy::{FrequencyStrategy, Guess, RandomStrategy, Strategy, StrategyType, candidates};
