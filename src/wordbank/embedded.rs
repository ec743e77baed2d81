//! Embedded word bank
//!
//! Word lists compiled into the binary at build time.

use crate::core::Category;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordbank.rs"));

/// Raw embedded words for a category
#[must_use]
pub const fn list_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Fruit => FRUIT,
        Category::Color => COLOR,
        Category::Sport => SPORT,
        Category::President => PRESIDENT,
        Category::ProgrammingLanguage => PROGRAMMING_LANGUAGE,
    }
}
