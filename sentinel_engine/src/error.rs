//! Error types for gameplay failures.
//!
//! None of these end a session. Command handlers render them with `to_string()`
//! and the world is left exactly as it was before the command.

use thiserror::Error;

/// Problems with the command line itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a command.")]
    Empty,
    #[error("Don't know what you mean.")]
    Unknown(String),
    /// Verb given without the argument it needs; carries the prompt to show.
    #[error("{0}")]
    MissingArgument(&'static str),
}

/// Movement refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("There is no door!")]
    NoExit(String),
    #[error("That door is locked!{}", level_hint(.required_level))]
    Locked { room: String, required_level: u32 },
}

fn level_hint(required_level: &u32) -> String {
    if *required_level > 0 {
        format!(" (requires a level {required_level} keycard)")
    } else {
        String::new()
    }
}

/// Item transfer refused. No partial transfer ever happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("There is no {0} here")]
    NotHere(String),
    #[error("You don't have a {0}")]
    NotCarried(String),
    #[error("You can't take the {0}")]
    NotTakeable(String),
    #[error("Your backpack is full (it holds {capacity} items).")]
    Full { capacity: usize },
}

/// `solve` could not be attempted.
///
/// Wrong passwords and missing items are not errors: they come back as an
/// unsuccessful [`SolveOutcome`](crate::puzzle::SolveOutcome).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("There's no puzzle to solve here.")]
    NoPuzzle,
    #[error("This puzzle requires using items. Try using an item instead.")]
    RequiresItems,
    #[error("What's your solution?")]
    MissingAnswer,
}

/// Saving or restoring failed. The world is never partially overwritten.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("No saved game found for '{slot}'!")]
    NoSave { slot: String },
    #[error("Saved game '{slot}' could not be read: {reason}")]
    Malformed { slot: String, reason: String },
    #[error("Saved game refers to an unknown {kind} '{id}'")]
    UnknownReference { kind: &'static str, id: String },
    #[error("Saved game locks room '{0}', which has no lock")]
    NotLockable(String),
    #[error("Saved game puts item '{0}' in more than one place")]
    DuplicateItem(String),
    #[error("Saved game holds {count} items but the backpack only fits {capacity}")]
    OverCapacity { count: usize, capacity: usize },
    #[error("could not encode save data: {0}")]
    Encode(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
