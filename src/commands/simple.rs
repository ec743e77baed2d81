//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use crate::autoplay::{FrequencyStrategy, Strategy};
use crate::core::{Category, GameSession, GuessKind, RandomSource, Status};
use crate::output::{write_board, write_game_over};
use crate::wordbank::WordBank;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Hint,
    Word(String),
    Letter(String),
    Empty,
}

fn parse_input(raw: &str) -> Input {
    let trimmed = raw.trim();
    if let Some(word) = trimmed.strip_prefix('!') {
        return Input::Word(word.to_string());
    }
    match trimmed.to_lowercase().as_str() {
        "" => Input::Empty,
        "quit" | "exit" => Input::Quit,
        "new" => Input::NewGame,
        "hint" => Input::Hint,
        _ => Input::Letter(trimmed.to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(bank: &WordBank, rng: &mut dyn RandomSource) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(bank, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple CLI mode over any reader and writer
///
/// Ends when the player quits or input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    bank: &WordBank,
    rng: &mut dyn RandomSource,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Hangman - Simple Mode                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time. You have 6 lives, good luck!")?;
    writeln!(out, "  - Type a letter (or symbol) to guess it")?;
    writeln!(out, "  - Type !word to guess the whole word")?;
    writeln!(out, "Commands: 'hint', 'new' for a new game, 'quit' to exit\n")?;

    let mut played = 0usize;
    let mut won = 0usize;

    'games: loop {
        let Some(category) = choose_category(bank, input, out)? else {
            break;
        };

        let mut session = GameSession::new();
        let start = session.select_category(bank, category, rng)?;
        writeln!(
            out,
            "\n{} {} letters, {} lives.",
            format!("{category}:").bright_cyan().bold(),
            start.word_len,
            start.lives
        )?;

        while !session.is_over() {
            write_board(out, &session)?;
            let Some(line) = read_line(input, out, "Guess")? else {
                break 'games;
            };

            match parse_input(&line) {
                Input::Quit => break 'games,
                Input::NewGame => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'games;
                }
                Input::Empty => {}
                Input::Hint => match FrequencyStrategy.next_guess(&session, bank, rng) {
                    Some(guess) => {
                        writeln!(out, "💡 Try {}", guess.to_string().bright_yellow())?;
                    }
                    None => writeln!(out, "No hint available")?,
                },
                Input::Letter(letter) if session.has_guessed(&letter, GuessKind::Letter) => {
                    writeln!(out, "You already guessed {}!", letter.to_uppercase())?;
                }
                Input::Letter(letter) => {
                    let outcome = session.guess_letter(&letter)?;
                    let shown = letter.to_uppercase();
                    if outcome.matched {
                        let msg = format!("✓ {shown} x{}", outcome.hits);
                        writeln!(out, "{}", msg.green())?;
                    } else {
                        writeln!(out, "{}", format!("✗ No {shown}").red())?;
                    }
                }
                Input::Word(word) if session.has_guessed(&word, GuessKind::Word) => {
                    writeln!(out, "You already guessed {}!", word.trim().to_uppercase())?;
                }
                Input::Word(word) => {
                    let outcome = session.guess_full_word(&word)?;
                    if !outcome.matched {
                        writeln!(out, "{}", "Wrong guess, try again!".red())?;
                    }
                }
            }
        }

        write_board(out, &session)?;
        write_game_over(out, &session)?;
        played += 1;
        won += usize::from(session.status() == Status::Won);
        writeln!(out, "Games: {played} | Won: {won}\n")?;

        match read_line(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => break,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Ask for a category until a valid one is given
///
/// Returns `None` when the player quits or input ends.
fn choose_category<R: BufRead, W: Write>(
    bank: &WordBank,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Category>> {
    let categories: Vec<Category> = bank.categories().collect();
    if categories.is_empty() {
        anyhow::bail!("word bank has no words");
    }

    writeln!(out, "Choose a category:")?;
    for (i, category) in categories.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, category.label())?;
    }

    loop {
        let Some(line) = read_line(input, out, "Category")? else {
            return Ok(None);
        };
        if matches!(parse_input(&line), Input::Quit) {
            return Ok(None);
        }

        let by_number = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| bank.menu_category(n));
        let chosen = by_number.or_else(|| {
            line.parse::<Category>()
                .ok()
                .filter(|c| categories.contains(c))
        });

        match chosen {
            Some(category) => return Ok(Some(category)),
            None => writeln!(out, "❌ Pick a number from 1 to {}", categories.len())?,
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
