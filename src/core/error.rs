//! Game session errors

use super::{Category, Status};
use thiserror::Error;

/// Rejected session operations
///
/// A rejected operation never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A category was already chosen for this session
    #[error("You already chose a category!")]
    AlreadyStarted,

    /// A guess was submitted while the session is not in progress
    #[error("Cannot guess while the game is {0}")]
    InvalidState(Status),

    /// The word bank has no words for the chosen category
    #[error("No words available for category {0}")]
    EmptyCategory(Category),
}
