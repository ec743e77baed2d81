//! Core domain types for Hangman
//!
//! This module contains the game rules: tokens, words, categories, the
//! random source used for word selection, and the session state machine.

mod category;
mod error;
mod rng;
mod session;
mod token;
mod word;

pub use category::{Category, CategoryError};
pub use error::GameError;
pub use rng::{GameRng, RandomSource, ThreadRandom};
pub use session::{
    GameSession, GuessKind, GuessOutcome, GuessRecord, MAX_LIVES, SessionStart, Status,
};
pub use token::Token;
pub use word::{Word, WordError};
