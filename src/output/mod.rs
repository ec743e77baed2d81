//! Terminal output formatting
//!
//! Display utilities for boards, results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_result, write_board, write_game_over};
