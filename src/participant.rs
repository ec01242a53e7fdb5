//! The player and the dealer.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::BLACKJACK;

/// Name the dealer always plays under.
pub const DEALER_NAME: &str = "Dealer";

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

/// A named participant holding a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
}

impl Participant {
    /// Creates a player with the given display name and an empty hand.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Player,
            hand: Hand::new(),
        }
    }

    /// Creates the dealer with an empty hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: String::from(DEALER_NAME),
            role: Role::Dealer,
            hand: Hand::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Empties the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Full view of the hand: every card and the running total.
    #[must_use]
    pub const fn show_hand(&self) -> HandView<'_> {
        self.show_hand_against(BLACKJACK)
    }

    /// Full view of the hand with the total computed against `limit`.
    #[must_use]
    pub const fn show_hand_against(&self, limit: u8) -> HandView<'_> {
        HandView {
            participant: self,
            limit,
        }
    }

    /// View of the hand right after the deal.
    ///
    /// The dealer keeps its first card hidden; the player shows everything.
    #[must_use]
    pub const fn flop(&self) -> Flop<'_> {
        self.flop_against(BLACKJACK)
    }

    /// View of the hand right after the deal, totals computed against `limit`.
    #[must_use]
    pub const fn flop_against(&self, limit: u8) -> Flop<'_> {
        Flop {
            participant: self,
            limit,
        }
    }
}

/// Displays all of a participant's cards and the total.
#[derive(Debug, Clone, Copy)]
pub struct HandView<'a> {
    participant: &'a Participant,
    limit: u8,
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.participant.hand();
        writeln!(f, "===== {}'s Hand =====", self.participant.name())?;
        for card in hand.cards() {
            writeln!(f, "=> {card}")?;
        }
        writeln!(f, "=> Total: {}", hand.total_against(self.limit))
    }
}

/// Displays a participant's hand as seen right after the deal.
#[derive(Debug, Clone, Copy)]
pub struct Flop<'a> {
    participant: &'a Participant,
    limit: u8,
}

impl fmt::Display for Flop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.participant.role() {
            Role::Player => {
                fmt::Display::fmt(&self.participant.show_hand_against(self.limit), f)
            }
            Role::Dealer => {
                writeln!(f, "===== {}'s Hand =====", self.participant.name())?;
                writeln!(f, "=> The first card is hidden.")?;
                match self.participant.hand().cards().get(1) {
                    Some(card) => writeln!(f, "=> The second card is: {card}"),
                    None => writeln!(f, "=> The second card is not dealt yet."),
                }
            }
        }
    }
}
