//! A single-player console blackjack game with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time as a
//! state machine (deal, player turn, dealer turn, showdown) and a
//! [`Console`] that drives it from line-based input.
//!
//! # Example
//!
//! ```
//! use bjconsole::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42, "Alice");
//! game.deal_cards().unwrap();
//! let state = game.begin_player_turn().unwrap();
//! assert!(matches!(state, GameState::PlayerTurn | GameState::Resolved(_)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::{ActionError, DealError, EmptyDeckError, InvalidInputError, ShowdownError};
pub use game::{DealerStep, Game, GameState, PlayerAction};
pub use hand::Hand;
pub use options::{BLACKJACK, DEALER_STAND, GameOptions};
pub use participant::{DEALER_NAME, Participant, Role};
pub use result::{Outcome, Verdict};
