//! Error types for game operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// A card was requested from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// A console response that is not one of the offered choices.
///
/// The console recovers from this by prompting again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized choice {0:?}")]
pub struct InvalidInputError(pub String);

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out while dealing.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out on a hit.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for the dealer or showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The deck ran out while the dealer had to draw.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that end a console session early.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
    /// Input ended while a hit or stand decision was pending.
    #[error("input closed in the middle of a round")]
    InputClosed,
    /// The deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn or the showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
