//! Word categories

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A themed group of candidate words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Fruit,
    Color,
    Sport,
    President,
    ProgrammingLanguage,
}

/// Error type for unrecognized category names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error(
        "Unknown category '{0}' (expected fruit, color, sport, president or programming-language)"
    )]
    Unknown(String),
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Self; 5] = [
        Self::Fruit,
        Self::Color,
        Self::Sport,
        Self::President,
        Self::ProgrammingLanguage,
    ];

    /// Machine-readable name used on the command line and in word bank files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Color => "color",
            Self::Sport => "sport",
            Self::President => "president",
            Self::ProgrammingLanguage => "programming-language",
        }
    }

    /// Human-readable label for menus
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fruit => "Fruit",
            Self::Color => "Color",
            Self::Sport => "Sport",
            Self::President => "President",
            Self::ProgrammingLanguage => "Programming Language",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "fruit" | "fruits" => Ok(Self::Fruit),
            "color" | "colour" | "colors" => Ok(Self::Color),
            "sport" | "sports" => Ok(Self::Sport),
            "president" | "presidents" => Ok(Self::President),
            "programming-language" | "programming-languages" | "language" => {
                Ok(Self::ProgrammingLanguage)
            }
            _ => Err(CategoryError::Unknown(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!("FRUIT".parse::<Category>(), Ok(Category::Fruit));
        assert_eq!("Sports".parse::<Category>(), Ok(Category::Sport));
        assert_eq!(
            "programming_language".parse::<Category>(),
            Ok(Category::ProgrammingLanguage)
        );
        assert_eq!(
            " Programming Language ".parse::<Category>(),
            Ok(Category::ProgrammingLanguage)
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "vegetable".parse::<Category>(),
            Err(CategoryError::Unknown("vegetable".to_string()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(
            Category::ProgrammingLanguage.to_string(),
            "Programming Language"
        );
    }
}
