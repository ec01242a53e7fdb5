use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::participant::Role;

use super::{Game, GameState, PlayerAction};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Starts the player's turn after the deal.
    ///
    /// A player already on 21 wins on the spot; the dealer never plays and
    /// the state goes straight to [`GameState::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not just been dealt.
    pub fn begin_player_turn(&mut self) -> Result<GameState, ActionError> {
        if self.state != GameState::Dealt {
            return Err(ActionError::InvalidState);
        }

        self.state = GameState::PlayerTurn;
        self.blackjack_or_bust(Role::Player);
        Ok(self.state)
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card brings the hand to 21 or over, the round ends here.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);
        debug!(
            "{} hits {card}, total {}",
            self.player.name(),
            self.player.hand().total_against(self.options.blackjack)
        );

        self.blackjack_or_bust(Role::Player);
        Ok(card)
    }

    /// Player action: Stand (keep current hand) and hand over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!("{} stands", self.player.name());
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Applies a player decision and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Same as [`Game::hit`] and [`Game::stand`].
    pub fn apply(&mut self, action: PlayerAction) -> Result<GameState, ActionError> {
        match action {
            PlayerAction::Hit => self.hit().map(|_| ())?,
            PlayerAction::Stand => self.stand()?,
        }
        Ok(self.state)
    }
}
