//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{GameError, GameSession, GuessKind, GuessOutcome, RandomSource, Token, Word};
use crate::wordbank::WordBank;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Letter order used when no bank word fits the board
const ENGLISH_FREQUENCY: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// A guess to submit to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(Token),
    Word(String),
}

impl Guess {
    /// Submit this guess to a session
    ///
    /// # Errors
    ///
    /// Propagates the session's `GameError` when it is not in progress.
    pub fn apply(&self, session: &mut GameSession) -> Result<GuessOutcome, GameError> {
        match self {
            Self::Letter(token) => session.guess_letter(token.as_str()),
            Self::Word(word) => session.guess_full_word(word),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(token) => write!(f, "{token}"),
            Self::Word(word) => write!(f, "{word}"),
        }
    }
}

/// A strategy for picking the next guess in a running session
pub trait Strategy {
    /// Pick the next guess
    ///
    /// Returns `None` if the session is not in progress or nothing is left
    /// to guess.
    fn next_guess(
        &self,
        session: &GameSession,
        bank: &WordBank,
        rng: &mut dyn RandomSource,
    ) -> Option<Guess>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Candidate filtering with most-common-token guesses (default)
    Frequency(FrequencyStrategy),
    /// Random unguessed letters
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(
        &self,
        session: &GameSession,
        bank: &WordBank,
        rng: &mut dyn RandomSource,
    ) -> Option<Guess> {
        match self {
            Self::Frequency(s) => s.next_guess(session, bank, rng),
            Self::Random(s) => s.next_guess(session, bank, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Bank words in the session's category that agree with everything guessed so far
///
/// A candidate has the secret's length, shows the revealed token in every
/// revealed slot, holds no guessed letter in a hidden slot, and is not a
/// rejected full-word guess.
#[must_use]
pub fn candidates<'a>(session: &GameSession, bank: &'a WordBank) -> Vec<&'a Word> {
    let Some(category) = session.category() else {
        return Vec::new();
    };
    let revealed = session.revealed();

    let guessed_letters: FxHashSet<&Token> = session
        .guessed()
        .iter()
        .filter(|g| g.kind == GuessKind::Letter)
        .map(|g| &g.token)
        .collect();
    let rejected_words: FxHashSet<&str> = session
        .guessed()
        .iter()
        .filter(|g| g.kind == GuessKind::Word && !g.hit)
        .map(|g| g.token.as_str())
        .collect();

    bank.words(category)
        .iter()
        .filter(|word| word.len() == revealed.len())
        .filter(|word| !rejected_words.contains(word.text()))
        .filter(|word| {
            word.tokens()
                .iter()
                .zip(revealed)
                .all(|(token, slot)| match slot {
                    Some(shown) => token == shown,
                    None => !guessed_letters.contains(token),
                })
        })
        .collect()
}

/// Fallback: the next common English letter nobody has tried yet
fn fallback_letter(session: &GameSession) -> Option<Guess> {
    ENGLISH_FREQUENCY
        .chars()
        .map(Token::from)
        .find(|token| !session.has_guessed(token.as_str(), GuessKind::Letter))
        .map(Guess::Letter)
}

/// Candidate-filtering strategy
///
/// Guesses the word outright once a single candidate remains, otherwise the
/// unguessed token that appears in the most candidates. Ties go to the
/// alphabetically first token.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_guess(
        &self,
        session: &GameSession,
        bank: &WordBank,
        _rng: &mut dyn RandomSource,
    ) -> Option<Guess> {
        if session.is_over() || session.category().is_none() {
            return None;
        }

        let candidates = candidates(session, bank);

        if let [only] = candidates.as_slice() {
            return Some(Guess::Word(only.text().to_string()));
        }

        let mut counts: FxHashMap<&Token, usize> = FxHashMap::default();
        for word in &candidates {
            for token in word.distinct_tokens() {
                if !session.has_guessed(token.as_str(), GuessKind::Letter) {
                    *counts.entry(token).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(token, _)| Guess::Letter(token.clone()))
            .or_else(|| fallback_letter(session))
    }
}

/// Random strategy
///
/// Picks a random unguessed letter from A-Z. Useful as a baseline.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_guess(
        &self,
        session: &GameSession,
        _bank: &WordBank,
        rng: &mut dyn RandomSource,
    ) -> Option<Guess> {
        if session.is_over() || session.category().is_none() {
            return None;
        }

        let remaining: Vec<Token> = ('A'..='Z')
            .map(Token::from)
            .filter(|token| !session.has_guessed(token.as_str(), GuessKind::Letter))
            .collect();

        if remaining.is_empty() {
            return None;
        }

        Some(Guess::Letter(remaining[rng.pick(remaining.len())].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, GameRng, Status};

    fn bank() -> WordBank {
        WordBank::builder()
            .with_words(Category::Fruit, ["PEAR", "PLUM", "LIME", "BANANA"])
            .build()
    }

    fn start(bank: &WordBank, seed: u64) -> GameSession {
        let mut session = GameSession::new();
        session
            .select_category(bank, Category::Fruit, &mut GameRng::new(seed))
            .unwrap();
        session
    }

    fn play_out(strategy: &dyn Strategy, bank: &WordBank, session: &mut GameSession, seed: u64) {
        let mut rng = GameRng::new(seed);
        while let Some(guess) = strategy.next_guess(session, bank, &mut rng) {
            guess.apply(session).unwrap();
        }
    }

    #[test]
    fn candidates_filter_by_length() {
        let bank = bank();
        let mut session = GameSession::new();
        // Index 3 is BANANA, the only six-letter word
        struct Last;
        impl RandomSource for Last {
            fn pick(&mut self, len: usize) -> usize {
                len - 1
            }
        }
        session
            .select_category(&bank, Category::Fruit, &mut Last)
            .unwrap();

        let found = candidates(&session, &bank);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text(), "BANANA");
    }

    #[test]
    fn candidates_respect_misses_and_reveals() {
        let bank = bank();
        let mut session = GameSession::new();
        struct First;
        impl RandomSource for First {
            fn pick(&mut self, _len: usize) -> usize {
                0
            }
        }
        session
            .select_category(&bank, Category::Fruit, &mut First)
            .unwrap();
        assert_eq!(candidates(&session, &bank).len(), 3);

        // PEAR: 'P' hits slot 0, ruling out LIME
        session.guess_letter("p").unwrap();
        let texts: Vec<&str> = candidates(&session, &bank)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, vec!["PEAR", "PLUM"]);

        // 'U' misses, ruling out PLUM
        session.guess_letter("u").unwrap();
        let texts: Vec<&str> = candidates(&session, &bank)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, vec!["PEAR"]);
    }

    #[test]
    fn candidates_skip_rejected_words() {
        let bank = bank();
        let mut session = GameSession::new();
        struct Second;
        impl RandomSource for Second {
            fn pick(&mut self, _len: usize) -> usize {
                1
            }
        }
        session
            .select_category(&bank, Category::Fruit, &mut Second)
            .unwrap();
        session.guess_full_word("pear").unwrap();

        assert!(candidates(&session, &bank).iter().all(|w| w.text() != "PEAR"));
    }

    #[test]
    fn candidates_empty_before_start() {
        let bank = bank();
        assert!(candidates(&GameSession::new(), &bank).is_empty());
    }

    #[test]
    fn frequency_guesses_word_when_one_candidate() {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["PEAR"])
            .build();
        let session = start(&bank, 0);

        let guess = FrequencyStrategy.next_guess(&session, &bank, &mut GameRng::new(0));
        assert_eq!(guess, Some(Guess::Word("PEAR".to_string())));
    }

    #[test]
    fn frequency_prefers_common_token() {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["PEAR", "PLUM", "LIME"])
            .build();
        let session = start(&bank, 3);

        // E, L, M and P each appear in two candidates; ties go to E
        let guess = FrequencyStrategy.next_guess(&session, &bank, &mut GameRng::new(0));
        assert_eq!(guess, Some(Guess::Letter(Token::normalize("E"))));
    }

    #[test]
    fn frequency_falls_back_to_english_order() {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["KIWI"])
            .build();
        let mut session = start(&bank, 0);
        session.guess_letter("e").unwrap();

        // No six-letter word can match a four-letter board
        let other = WordBank::builder()
            .with_words(Category::Fruit, ["BANANA"])
            .build();
        let guess = FrequencyStrategy.next_guess(&session, &other, &mut GameRng::new(0));
        assert_eq!(guess, Some(Guess::Letter(Token::normalize("T"))));
    }

    #[test]
    fn word_miss_leaves_letter_available() {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["KIWI"])
            .build();
        let mut session = start(&bank, 0);
        session.guess_full_word("e").unwrap();

        let other = WordBank::builder()
            .with_words(Category::Fruit, ["BANANA"])
            .build();
        let guess = FrequencyStrategy.next_guess(&session, &other, &mut GameRng::new(0));
        assert_eq!(guess, Some(Guess::Letter(Token::normalize("E"))));
    }

    #[test]
    fn frequency_wins_every_embedded_word() {
        struct At(usize);
        impl RandomSource for At {
            fn pick(&mut self, _len: usize) -> usize {
                self.0
            }
        }

        let bank = WordBank::embedded();
        for category in Category::ALL {
            for index in 0..bank.words(category).len() {
                let mut session = GameSession::new();
                session
                    .select_category(&bank, category, &mut At(index))
                    .unwrap();
                play_out(&FrequencyStrategy, &bank, &mut session, 0);
                assert_eq!(
                    session.status(),
                    Status::Won,
                    "lost on {}",
                    session.secret().unwrap()
                );
            }
        }
    }

    #[test]
    fn random_strategy_finishes_game() {
        let bank = bank();
        let mut session = start(&bank, 9);
        play_out(&RandomStrategy, &bank, &mut session, 9);
        assert!(session.is_over());
    }

    #[test]
    fn no_guess_when_over_or_not_started() {
        let bank = bank();
        let mut rng = GameRng::new(0);
        assert_eq!(
            FrequencyStrategy.next_guess(&GameSession::new(), &bank, &mut rng),
            None
        );

        let mut session = start(&bank, 0);
        let secret = session.secret().unwrap().text().to_string();
        session.guess_full_word(&secret).unwrap();
        assert_eq!(FrequencyStrategy.next_guess(&session, &bank, &mut rng), None);
        assert_eq!(RandomStrategy.next_guess(&session, &bank, &mut rng), None);
    }

    #[test]
    fn strategy_from_name() {
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("frequency"),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown"),
            StrategyType::Frequency(_)
        ));
    }

    #[test]
    fn guess_display() {
        assert_eq!(Guess::Letter(Token::normalize("q")).to_string(), "Q");
        assert_eq!(Guess::Word("PEAR".to_string()).to_string(), "PEAR");
    }
}
