//! Game engine and round state management.

use alloc::string::String;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, EmptyDeckError};
use crate::options::GameOptions;
use crate::participant::{Participant, Role};
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DealerStep;
pub use state::{GameState, PlayerAction};

/// Cards dealt before the player's turn, two per side.
const INITIAL_CARDS: usize = 4;

/// A single-player blackjack game against the dealer.
///
/// The game owns the deck and both participants and moves one round at a
/// time through [`GameState`]. Each transition is a method that checks the
/// current state first, so the engine can be driven by any front end.
///
/// ```
/// use bjconsole::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 42, "Alice");
/// game.deal_cards().unwrap();
/// assert_eq!(game.state(), GameState::Dealt);
/// assert_eq!(game.player().hand().len(), 2);
/// assert_eq!(game.cards_remaining(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    deck: Deck,
    player: Participant,
    dealer: Participant,
    state: GameState,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game for the named player, shuffling a deck from `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, player_name: impl Into<String>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            options,
            deck,
            player: Participant::player(player_name),
            dealer: Participant::dealer(),
            state: GameState::Init,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the outcome once the round is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Renames the player.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player.set_name(name);
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Replaces the deck, e.g. to replay a known deal order.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `Init` state or the deck
    /// holds fewer than four cards. Nothing is dealt on error.
    pub fn deal_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Init {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::EmptyDeck(EmptyDeckError));
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        debug!(
            "dealt: {} has {}, dealer has {}",
            self.player.name(),
            self.player.hand().total_against(self.options.blackjack),
            self.dealer.hand().total_against(self.options.blackjack)
        );

        self.state = GameState::Dealt;
        Ok(())
    }

    /// Starts a new round with a freshly shuffled deck and empty hands.
    ///
    /// The player's name is kept.
    pub fn new_round(&mut self) {
        self.deck = Deck::new(&mut self.rng);
        self.player.clear_hand();
        self.dealer.clear_hand();
        self.state = GameState::Init;
        debug!("new round, {} cards in deck", self.deck.len());
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.deck.deal_one()
    }

    /// Ends the round if `role`'s hand is exactly on target or over it.
    ///
    /// Exactly on target is checked first, so a hand of 21 is never a bust.
    fn blackjack_or_bust(&mut self, role: Role) -> Option<Outcome> {
        let target = self.options.blackjack;
        let hand = match role {
            Role::Player => self.player.hand(),
            Role::Dealer => self.dealer.hand(),
        };

        let outcome = if hand.total_against(target) == target {
            match role {
                Role::Player => Outcome::PlayerBlackjack,
                Role::Dealer => Outcome::DealerBlackjack,
            }
        } else if hand.is_busted_against(target) {
            match role {
                Role::Player => Outcome::PlayerBust,
                Role::Dealer => Outcome::DealerBust,
            }
        } else {
            return None;
        };

        self.finish(outcome);
        Some(outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(
            "round over: {outcome:?} (player {}, dealer {})",
            self.player.hand().total_against(self.options.blackjack),
            self.dealer.hand().total_against(self.options.blackjack)
        );
        self.state = GameState::Resolved(outcome);
    }
}
