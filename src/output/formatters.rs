//! Formatting utilities for terminal output

use crate::core::{MAX_LIVES, Token};

/// Gallows drawings, indexed by gallows stage (wrong guesses, clamped to 6)
const GALLOWS: [[&str; 7]; 7] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "=========",
    ],
];

/// Lines of the gallows drawing for a stage; stages past the last clamp
#[must_use]
pub fn gallows_lines(stage: u32) -> &'static [&'static str; 7] {
    let idx = (stage.min(MAX_LIVES)) as usize;
    &GALLOWS[idx]
}

/// Format revealed slots as `P _ A _`
#[must_use]
pub fn masked_word(revealed: &[Option<Token>]) -> String {
    revealed
        .iter()
        .map(|slot| slot.as_ref().map_or("_", Token::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join guessed tokens with spaces
#[must_use]
pub fn token_list<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens
        .into_iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hearts for remaining lives, hollow hearts for lost ones
#[must_use]
pub fn lives_bar(lives_remaining: u32) -> String {
    let lives = lives_remaining.min(MAX_LIVES) as usize;
    format!(
        "{}{}",
        "♥".repeat(lives),
        "♡".repeat(MAX_LIVES as usize - lives)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
