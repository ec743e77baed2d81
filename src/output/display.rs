//! Display functions for boards and command results

use super::formatters::{create_progress_bar, gallows_lines, lives_bar, masked_word, token_list};
use crate::commands::SimulationResult;
use crate::core::{Category, GameSession, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Write the gallows, the word and the wrong guesses of a session
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows_lines(session.gallows_stage()) {
        writeln!(out, "    {}", line.bright_black())?;
    }

    if let Some(category) = session.category() {
        writeln!(out, "\n  Category: {}", category.label().bright_cyan())?;
    }
    writeln!(
        out,
        "  Word:     {}",
        masked_word(session.revealed()).bright_white().bold()
    )?;
    writeln!(
        out,
        "  Lives:    {} ({} left)",
        lives_bar(session.lives_remaining()).red(),
        session.lives_remaining()
    )?;

    let wrong = token_list(session.wrong_guesses());
    if !wrong.is_empty() {
        writeln!(out, "  Misses:   {}", wrong.yellow())?;
    }
    let wrong_words = token_list(session.wrong_words());
    if !wrong_words.is_empty() {
        writeln!(out, "  Not it:   {}", wrong_words.yellow())?;
    }
    writeln!(out)
}

/// Write the end-of-game banner
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_game_over<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let answer = session
        .secret()
        .map(ToString::to_string)
        .unwrap_or_default();

    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    match session.status() {
        Status::Won => {
            writeln!(
                out,
                "{}",
                "    🎉  You guessed the right answer. You win!  🎉"
                    .bright_green()
                    .bold()
            )?;
            writeln!(
                out,
                "    The word was {} ({} wrong {})",
                answer.bright_yellow().bold(),
                session.wrong_count(),
                if session.wrong_count() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            )?;
        }
        Status::Lost => {
            writeln!(out, "{}", "    💀  Uh... I guess you're dead now.".red().bold())?;
            writeln!(out, "    The correct word was {}", answer.bright_yellow().bold())?;
        }
        Status::NotStarted | Status::InProgress => {}
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won / lost:       {} / {}", result.won, result.lost);
    println!("   Average misses:   {:.2}", result.average_wrong);
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for wrong in 0..=result.max_wrong() {
        let count = result.distribution.get(&wrong).copied().unwrap_or(0);
        let pct = if result.total_games > 0 {
            count as f64 / result.total_games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    println!("\n🗂  {}", "By category:".bright_cyan().bold());
    for category in Category::ALL {
        if let Some(&(won, played)) = result.by_category.get(&category) {
            println!("   {:<22} {won:5} / {played:<5}", category.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RandomSource;
    use crate::wordbank::WordBank;

    struct First;

    impl RandomSource for First {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn session() -> GameSession {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["PEAR"])
            .build();
        let mut session = GameSession::new();
        session
            .select_category(&bank, Category::Fruit, &mut First)
            .unwrap();
        session
    }

    #[test]
    fn board_shows_word_and_misses() {
        let mut session = session();
        session.guess_letter("e").unwrap();
        session.guess_letter("z").unwrap();

        let mut out = Vec::new();
        write_board(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("_ E _ _"));
        assert!(text.contains('Z'));
        assert!(text.contains("5 left"));
        assert!(!text.contains("Not it"));
    }

    #[test]
    fn board_lists_word_misses_apart() {
        let mut session = session();
        session.guess_full_word("plum").unwrap();

        let mut out = Vec::new();
        write_board(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("PLUM"));
        assert!(!text.contains("Misses"));
    }

    #[test]
    fn game_over_shows_answer_on_loss() {
        let mut session = session();
        for letter in ["q", "w", "x", "y", "z", "j", "k"] {
            session.guess_letter(letter).unwrap();
        }

        let mut out = Vec::new();
        write_game_over(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("dead"));
        assert!(text.contains("PEAR"));
    }

    #[test]
    fn game_over_shows_win() {
        let mut session = session();
        session.guess_full_word("pear").unwrap();

        let mut out = Vec::new();
        write_game_over(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("You win"));
    }
}
