//! Hangman game session
//!
//! A session moves through `NotStarted → InProgress → Won | Lost`. Category
//! selection starts it; letter and full-word guesses drive it to one of the
//! two terminal states, which are never left.

use super::{Category, GameError, RandomSource, Token, Word};
use crate::wordbank::WordBank;
use std::fmt;
use tracing::{debug, info};

/// Lives a player starts with. The session is lost on the wrong guess after
/// the last life is gone.
pub const MAX_LIVES: u32 = 6;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Information handed back when a category is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStart {
    pub category: Category,
    pub lives: u32,
    pub word_len: usize,
}

/// Result of a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Revealed slots after the guess
    pub revealed: Vec<Option<Token>>,
    /// Whether the guess matched anything
    pub matched: bool,
    /// Number of slots the guess matched (all of them for a correct word)
    pub hits: usize,
    pub status: Status,
    pub wrong_count: u32,
}

/// Letter or full-word guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Letter,
    Word,
}

/// A distinct guess made during the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub token: Token,
    pub kind: GuessKind,
    pub hit: bool,
}

#[derive(Debug, Clone)]
struct Round {
    category: Category,
    secret: Word,
    revealed: Vec<Option<Token>>,
}

/// One game of hangman
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    round: Option<Round>,
    wrong_count: u32,
    status: Status,
    guessed: Vec<GuessRecord>,
}

impl GameSession {
    /// Create a session waiting for a category
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the category and draw the secret word from the bank
    ///
    /// # Errors
    ///
    /// - `GameError::AlreadyStarted` if a category was already chosen
    /// - `GameError::EmptyCategory` if the bank holds no words for `category`
    ///
    /// The session is unchanged on error.
    pub fn select_category<R: RandomSource + ?Sized>(
        &mut self,
        bank: &WordBank,
        category: Category,
        rng: &mut R,
    ) -> Result<SessionStart, GameError> {
        if self.status != Status::NotStarted {
            return Err(GameError::AlreadyStarted);
        }

        let words = bank.words(category);
        if words.is_empty() {
            return Err(GameError::EmptyCategory(category));
        }

        let secret = words[rng.pick(words.len())].clone();
        let word_len = secret.len();

        self.round = Some(Round {
            category,
            revealed: vec![None; word_len],
            secret,
        });
        self.status = Status::InProgress;

        info!(%category, word_len, "category selected");

        Ok(SessionStart {
            category,
            lives: MAX_LIVES,
            word_len,
        })
    }

    /// Guess a single token, revealing every slot it matches
    ///
    /// A miss costs one life.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` unless the session is in progress.
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let token = Token::normalize(input);
        let round = self.active_round()?;

        let positions = round.secret.positions_of(&token);
        for &i in positions {
            round.revealed[i] = Some(token.clone());
        }
        let hits = positions.len();
        let matched = hits > 0;

        debug!(token = %token, hits, "letter guess");
        self.apply_guess(token, GuessKind::Letter, matched);

        Ok(self.outcome(matched, hits))
    }

    /// Guess the whole word
    ///
    /// Whitespace in the guess is ignored. A correct guess reveals every slot
    /// and wins; a wrong one costs exactly one life, the same as a letter.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` unless the session is in progress.
    pub fn guess_full_word(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let candidate = normalize_word(input);
        let round = self.active_round()?;

        let matched = candidate == round.secret.text();
        let hits = if matched {
            round.revealed = round.secret.tokens().iter().cloned().map(Some).collect();
            round.revealed.len()
        } else {
            0
        };

        debug!(guess = %candidate, matched, "word guess");
        self.apply_guess(Token::normalize(&candidate), GuessKind::Word, matched);

        Ok(self.outcome(matched, hits))
    }

    fn active_round(&mut self) -> Result<&mut Round, GameError> {
        match (self.status, self.round.as_mut()) {
            (Status::InProgress, Some(round)) => Ok(round),
            (status, _) => Err(GameError::InvalidState(status)),
        }
    }

    fn apply_guess(&mut self, token: Token, kind: GuessKind, matched: bool) {
        if !matched {
            self.wrong_count += 1;
        }
        if !self.has_guessed(token.as_str(), kind) {
            self.guessed.push(GuessRecord {
                token,
                kind,
                hit: matched,
            });
        }

        let solved = self
            .round
            .as_ref()
            .is_some_and(|round| round.revealed.iter().all(Option::is_some));

        if solved {
            self.status = Status::Won;
        } else if self.wrong_count > MAX_LIVES {
            self.status = Status::Lost;
        }

        if self.status.is_terminal() {
            info!(status = %self.status, wrong = self.wrong_count, "game over");
        }
    }

    fn outcome(&self, matched: bool, hits: usize) -> GuessOutcome {
        GuessOutcome {
            revealed: self.revealed().to_vec(),
            matched,
            hits,
            status: self.status,
            wrong_count: self.wrong_count,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// True once the session is won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.round.as_ref().map(|round| round.category)
    }

    /// The secret word, once chosen
    ///
    /// Front ends should only show it after the session is over.
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.round.as_ref().map(|round| &round.secret)
    }

    /// Per-slot progress; empty before a category is chosen
    #[must_use]
    pub fn revealed(&self) -> &[Option<Token>] {
        self.round
            .as_ref()
            .map_or(&[], |round| round.revealed.as_slice())
    }

    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        MAX_LIVES - self.wrong_count.min(MAX_LIVES)
    }

    /// Gallows drawing index, `0..=MAX_LIVES`
    #[must_use]
    pub fn gallows_stage(&self) -> u32 {
        self.wrong_count.min(MAX_LIVES)
    }

    /// Distinct guesses in the order they were first made
    #[must_use]
    pub fn guessed(&self) -> &[GuessRecord] {
        &self.guessed
    }

    /// Wrong letter guesses in the order they were first made
    pub fn wrong_guesses(&self) -> impl Iterator<Item = &Token> {
        self.misses(GuessKind::Letter)
    }

    /// Wrong full-word guesses in the order they were first made
    pub fn wrong_words(&self) -> impl Iterator<Item = &Token> {
        self.misses(GuessKind::Word)
    }

    fn misses(&self, kind: GuessKind) -> impl Iterator<Item = &Token> {
        self.guessed
            .iter()
            .filter(move |g| g.kind == kind && !g.hit)
            .map(|g| &g.token)
    }

    /// Whether this input was already guessed as a letter or as a word
    ///
    /// Letters and words are tracked apart, so a wrong word guess `E` does
    /// not block the letter `E`.
    #[must_use]
    pub fn has_guessed(&self, input: &str, kind: GuessKind) -> bool {
        let token = match kind {
            GuessKind::Letter => Token::normalize(input),
            GuessKind::Word => Token::normalize(&normalize_word(input)),
        };
        self.guessed
            .iter()
            .any(|g| g.kind == kind && g.token == token)
    }
}

/// Uppercase a full-word guess and drop its whitespace
fn normalize_word(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
