//! Hand valuation shared by the player and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::BLACKJACK;

fn evaluate_cards(cards: &[Card], limit: u8) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.rank.value());
    }

    // One demotion per ace, checked before each subtraction.
    for _ in 0..aces {
        if total <= limit {
            break;
        }
        total = total.saturating_sub(10);
    }

    total
}

/// The cards held by one participant, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand against the standard target of 21.
    ///
    /// Aces start at 11 and are demoted to 1, one at a time, only while the
    /// total is over 21.
    ///
    /// ```
    /// use bjconsole::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// assert_eq!(hand.total(), 12);
    /// ```
    #[must_use]
    pub fn total(&self) -> u8 {
        self.total_against(BLACKJACK)
    }

    /// Calculates the value of the hand, demoting aces while the total is
    /// over `limit`.
    #[must_use]
    pub fn total_against(&self, limit: u8) -> u8 {
        evaluate_cards(&self.cards, limit)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.is_busted_against(BLACKJACK)
    }

    /// Returns whether the hand is over `limit`.
    #[must_use]
    pub fn is_busted_against(&self, limit: u8) -> bool {
        self.total_against(limit) > limit
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
