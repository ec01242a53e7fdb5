use alloc::vec::Vec;
use core::cmp::Ordering;

use log::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::participant::Role;
use crate::result::Outcome;

use super::{Game, GameState};

/// What the dealer did on one step of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// Drew a card. The round may have ended on it.
    Hit(Card),
    /// Reached the stand threshold; totals go to showdown.
    Stand,
    /// The hand was already on 21 or over; the round ended without a draw.
    Finished(Outcome),
}

impl Game {
    /// Plays one step of the dealer's turn.
    ///
    /// The dealer's hand is checked for 21 or bust first, then the dealer
    /// draws a single card if below the stand threshold and is checked again.
    /// At or above the threshold the dealer stands and the game moves to
    /// [`GameState::Showdown`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// when the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerStep, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if let Some(outcome) = self.blackjack_or_bust(Role::Dealer) {
            return Ok(DealerStep::Finished(outcome));
        }

        let target = self.options.blackjack;
        if self.dealer.hand().total_against(target) >= self.options.dealer_stand {
            debug!("dealer stands on {}", self.dealer.hand().total_against(target));
            self.state = GameState::Showdown;
            return Ok(DealerStep::Stand);
        }

        let card = self.draw()?;
        self.dealer.add_card(card);
        debug!(
            "dealer draws {card}, total {}",
            self.dealer.hand().total_against(target)
        );

        self.blackjack_or_bust(Role::Dealer);
        Ok(DealerStep::Hit(card))
    }

    /// Plays the dealer's whole turn.
    ///
    /// Returns the cards drawn, in order. Afterwards the game is either in
    /// [`GameState::Showdown`] or already resolved by a dealer 21 or bust.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.state == GameState::DealerTurn {
            if let DealerStep::Hit(card) = self.dealer_step()? {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }

    /// Compares the totals after the dealer stood.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in showdown state.
    pub fn resolve_outcome(&mut self) -> Result<Outcome, ShowdownError> {
        if self.state != GameState::Showdown {
            return Err(ShowdownError::InvalidState);
        }

        let target = self.options.blackjack;
        let player_value = self.player.hand().total_against(target);
        let dealer_value = self.dealer.hand().total_against(target);

        let outcome = match player_value.cmp(&dealer_value) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::DealerWins,
            Ordering::Equal => Outcome::Push,
        };

        self.finish(outcome);
        Ok(outcome)
    }
}
