//! Word bank for Hangman
//!
//! Maps every category to its candidate words. The default bank is compiled
//! into the binary; custom banks come from [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{
    COLOR, COLOR_COUNT, FRUIT, FRUIT_COUNT, PRESIDENT, PRESIDENT_COUNT, PROGRAMMING_LANGUAGE,
    PROGRAMMING_LANGUAGE_COUNT, SPORT, SPORT_COUNT, list_for,
};

use crate::core::{Category, Word};
use loader::words_from_slice;
use rustc_hash::FxHashMap;

/// Immutable category → words mapping
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: FxHashMap<Category, Vec<Word>>,
}

impl WordBank {
    /// The bank compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let words = Category::ALL
            .iter()
            .map(|&category| (category, words_from_slice(list_for(category))))
            .collect();
        Self { words }
    }

    /// Start building a custom bank
    #[must_use]
    pub fn builder() -> WordBankBuilder {
        WordBankBuilder::default()
    }

    /// Words for a category; empty if the bank has none
    #[must_use]
    pub fn words(&self, category: Category) -> &[Word] {
        self.words.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Categories that have at least one word, in menu order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|&category| !self.words(category).is_empty())
    }

    /// Category at a 1-based position of [`categories`](Self::categories)
    #[must_use]
    pub fn menu_category(&self, number: usize) -> Option<Category> {
        number
            .checked_sub(1)
            .and_then(|i| self.categories().nth(i))
    }

    /// Total number of words across all categories
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }
}

/// Builder for [`WordBank`]
#[derive(Debug, Default)]
pub struct WordBankBuilder {
    words: FxHashMap<Category, Vec<Word>>,
}

impl WordBankBuilder {
    /// Add words to a category, skipping any that do not parse
    #[must_use]
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.words.entry(category).or_default();
        entry.extend(words.into_iter().filter_map(|s| Word::new(s.as_ref()).ok()));
        self
    }

    /// Add one already-parsed word
    pub fn push(&mut self, category: Category, word: Word) {
        self.words.entry(category).or_default().push(word);
    }

    #[must_use]
    pub fn build(self) -> WordBank {
        WordBank { words: self.words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(FRUIT.len(), FRUIT_COUNT);
        assert_eq!(COLOR.len(), COLOR_COUNT);
        assert_eq!(SPORT.len(), SPORT_COUNT);
        assert_eq!(PRESIDENT.len(), PRESIDENT_COUNT);
        assert_eq!(PROGRAMMING_LANGUAGE.len(), PROGRAMMING_LANGUAGE_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(FRUIT_COUNT, 16);
        assert_eq!(COLOR_COUNT, 15);
        assert_eq!(SPORT_COUNT, 22);
        assert_eq!(PRESIDENT_COUNT, 16);
        assert_eq!(PROGRAMMING_LANGUAGE_COUNT, 20);
    }

    #[test]
    fn embedded_words_are_uppercase() {
        for category in Category::ALL {
            for &word in list_for(category) {
                assert_eq!(word, word.to_uppercase(), "Word '{word}' is not uppercase");
            }
        }
    }

    #[test]
    fn embedded_bank_has_every_category() {
        let bank = WordBank::embedded();
        for category in Category::ALL {
            assert!(!bank.words(category).is_empty(), "{category} is empty");
            assert_eq!(bank.words(category).len(), list_for(category).len());
        }
        assert_eq!(bank.categories().count(), 5);
        assert_eq!(bank.total_words(), 89);
    }

    #[test]
    fn embedded_bank_keeps_symbol_tokens() {
        let bank = WordBank::embedded();
        let languages = bank.words(Category::ProgrammingLanguage);
        assert!(languages.iter().any(|w| w.text() == "C++"));
        assert!(languages.iter().any(|w| w.text() == "C#"));
        assert!(languages.iter().any(|w| w.text() == "OBJECTIVE-C"));
    }

    #[test]
    fn builder_skips_invalid_words() {
        let bank = WordBank::builder()
            .with_words(Category::Fruit, ["pear", "  ", "plum"])
            .build();

        assert_eq!(bank.words(Category::Fruit).len(), 2);
        assert!(bank.words(Category::Color).is_empty());
        assert_eq!(bank.categories().collect::<Vec<_>>(), vec![Category::Fruit]);
    }

    #[test]
    fn menu_category_skips_empty_categories() {
        let bank = WordBank::builder()
            .with_words(Category::Color, ["red"])
            .with_words(Category::President, ["lincoln"])
            .build();

        assert_eq!(bank.menu_category(1), Some(Category::Color));
        assert_eq!(bank.menu_category(2), Some(Category::President));
        assert_eq!(bank.menu_category(0), None);
        assert_eq!(bank.menu_category(3), None);
        assert_eq!(
            WordBank::embedded().menu_category(5),
            Some(Category::ProgrammingLanguage)
        );
    }

    #[test]
    fn builder_push_appends() {
        let mut builder = WordBank::builder().with_words(Category::Sport, ["golf"]);
        builder.push(Category::Sport, Word::new("rugby").unwrap());
        let bank = builder.build();

        let texts: Vec<&str> = bank.words(Category::Sport).iter().map(Word::text).collect();
        assert_eq!(texts, vec!["GOLF", "RUGBY"]);
    }
}
