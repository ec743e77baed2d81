//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{GameResult, SimulateConfig, SimulationResult, run_simulation, simulate_game};
