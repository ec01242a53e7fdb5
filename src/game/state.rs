//! Game state types.

use alloc::string::String;
use core::str::FromStr;

use crate::error::InvalidInputError;
use crate::result::Outcome;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fresh deck, empty hands; waiting for the deal.
    Init,
    /// Both hands hold two cards; the player's turn has not started.
    Dealt,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer stood; totals are ready to be compared.
    Showdown,
    /// The round is over.
    Resolved(Outcome),
}

impl GameState {
    /// Returns the outcome if the round is over.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// End the turn.
    Stand,
}

impl FromStr for PlayerAction {
    type Err = InvalidInputError;

    /// Parses the console choice: `1` hits, `2` stands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Hit),
            "2" => Ok(Self::Stand),
            other => Err(InvalidInputError(String::from(other))),
        }
    }
}
