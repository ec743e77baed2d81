//! Hangman
//!
//! A hangman game with themed categories, a TUI and a plain CLI mode, and an
//! automatic guesser for simulations.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Category, GameRng, GameSession, Status};
//! use hangman::wordbank::WordBank;
//!
//! let bank = WordBank::builder()
//!     .with_words(Category::Fruit, ["PEAR"])
//!     .build();
//!
//! let mut session = GameSession::new();
//! session
//!     .select_category(&bank, Category::Fruit, &mut GameRng::new(7))
//!     .unwrap();
//!
//! let outcome = session.guess_full_word("pear").unwrap();
//! assert_eq!(outcome.status, Status::Won);
//! ```

// Core domain types and game rules
pub mod core;

// Category word lists
pub mod wordbank;

// Automatic guessing strategies
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// tracing subscriber setup
pub mod logging;
