//! TUI application state and logic

use crate::autoplay::{FrequencyStrategy, Strategy};
use crate::core::{Category, GameSession, GuessKind, MAX_LIVES, RandomSource, Status};
use crate::wordbank::WordBank;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Longest token a player can type in letter mode
const MAX_TOKEN_INPUT: usize = 3;

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub session: GameSession,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: Box<dyn RandomSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    ChooseCategory,
    Letter,
    Word,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Games won with 0..=6 misses
    pub miss_distribution: [usize; MAX_LIVES as usize + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, rng: Box<dyn RandomSource>) -> Self {
        Self {
            bank,
            session: GameSession::new(),
            input_mode: InputMode::ChooseCategory,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Pick a category with the number keys.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Categories offered in the picker
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.bank.categories().collect()
    }

    /// Pick the category at a 1-based menu position
    pub fn choose_category(&mut self, number: usize) {
        let Some(category) = self.bank.menu_category(number) else {
            self.add_message("No such category!", MessageStyle::Error);
            return;
        };

        match self
            .session
            .select_category(self.bank, category, self.rng.as_mut())
        {
            Ok(start) => {
                self.input_mode = InputMode::Letter;
                self.add_message(
                    &format!(
                        "{category}: {} letters. You have {} lives, good luck!",
                        start.word_len, start.lives
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the input buffer as a letter guess
    pub fn submit_letter(&mut self) {
        let letter = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if letter.is_empty() {
            return;
        }
        if self.session.has_guessed(&letter, GuessKind::Letter) {
            self.add_message(
                &format!("You already guessed {}!", letter.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        match self.session.guess_letter(&letter) {
            Ok(outcome) if outcome.matched => self.add_message(
                &format!("{} appears {}x", letter.to_uppercase(), outcome.hits),
                MessageStyle::Success,
            ),
            Ok(_) => self.add_message(
                &format!("No {} in the word", letter.to_uppercase()),
                MessageStyle::Error,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.check_game_over();
    }

    /// Submit the input buffer as a full-word guess
    pub fn submit_word(&mut self) {
        let word = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if word.is_empty() {
            return;
        }
        if self.session.has_guessed(&word, GuessKind::Word) {
            self.add_message(
                &format!("You already guessed {}!", word.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        match self.session.guess_full_word(&word) {
            Ok(outcome) if !outcome.matched => {
                self.add_message("Wrong guess, try again!", MessageStyle::Error);
            }
            Ok(_) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        if self.input_mode == InputMode::Word {
            self.input_mode = InputMode::Letter;
        }
        self.check_game_over();
    }

    /// Show what the built-in guesser would play next
    pub fn hint(&mut self) {
        let guess = FrequencyStrategy.next_guess(&self.session, self.bank, self.rng.as_mut());
        match guess {
            Some(guess) => self.add_message(&format!("Hint: try {guess}"), MessageStyle::Info),
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    fn check_game_over(&mut self) {
        let status = self.session.status();
        if !status.is_terminal() {
            return;
        }

        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;
        let answer = self
            .session
            .secret()
            .map(ToString::to_string)
            .unwrap_or_default();

        if status == Status::Won {
            self.stats.games_won += 1;
            let misses = self.session.wrong_count().min(MAX_LIVES) as usize;
            self.stats.miss_distribution[misses] += 1;

            let celebration = match misses {
                0 => "🎯 FLAWLESS! Not a single miss! 🌟",
                1 | 2 => "🔥 SPLENDID! 🔥",
                3 | 4 => "👏 GREAT JOB! 👏",
                _ => "😅 PHEW! That was close! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message(
                &format!("You guessed the right answer: {answer}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Uh... I guess you're dead now. The correct word was {answer}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::ChooseCategory;
        self.add_message("New game started! Pick a category.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ChooseCategory => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if let Some(number) = c.to_digit(10) {
                        self.choose_category(number as usize);
                    }
                }
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game is over, ignore other keys
                }
            },
            InputMode::Letter => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char('?') => self.hint(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::Word;
                    self.input_buffer.clear();
                    self.add_message("Type the whole word, Enter to submit", MessageStyle::Info);
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_TOKEN_INPUT && !c.is_whitespace() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_letter(),
                _ => {}
            },
            InputMode::Word => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Letter;
                    self.input_buffer.clear();
                }
                KeyCode::Char(c) => self.input_buffer.push(c.to_ascii_uppercase()),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key press");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
