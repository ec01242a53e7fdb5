//! The deck a round is dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// A single 52-card deck.
///
/// Cards are dealt from the end of the sequence, so repeated deals never
/// repeat a card and the deck only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds one card of every suit and rank and shuffles them.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Builds a shuffled deck from a `ChaCha8` generator seeded with `seed`.
    ///
    /// ```
    /// use bjconsole::Deck;
    ///
    /// assert_eq!(Deck::seeded(7), Deck::seeded(7));
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a deck that deals exactly `draws`, first element first.
    ///
    /// ```
    /// use bjconsole::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::stacked(&[
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Two),
    /// ]);
    /// assert_eq!(deck.deal_one().unwrap().rank, Rank::Ace);
    /// assert_eq!(deck.len(), 1);
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Randomly permutes the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards are left.
    pub fn deal_one(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards; the last one is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
