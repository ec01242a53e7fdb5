//! Line-based console front end for [`Game`].
//!
//! The console reads one answer per line from any [`BufRead`] and narrates
//! the round to any [`Write`], so a whole session can be scripted.
//!
//! ```
//! use bjconsole::{Card, Console, Deck, Game, GameOptions, Rank, Suit};
//!
//! let mut game = Game::new(GameOptions::default(), 1, "Player1");
//! game.set_deck(Deck::stacked(&[
//!     Card::new(Suit::Hearts, Rank::Ace),
//!     Card::new(Suit::Clubs, Rank::Five),
//!     Card::new(Suit::Spades, Rank::King),
//!     Card::new(Suit::Clubs, Rank::Six),
//! ]));
//!
//! let mut output = Vec::new();
//! Console::new(game, "Ann\n2\n".as_bytes(), &mut output)
//!     .run()
//!     .unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Ann hit blackjack!"));
//! assert!(text.ends_with("Goodbye!\n"));
//! ```

use alloc::string::String;
use std::io::{BufRead, Write};

use crate::error::ConsoleError;
use crate::game::{DealerStep, Game, GameState, PlayerAction};
use crate::result::Outcome;

/// Console answer that starts another round.
const REPLAY_YES: &str = "1";

/// Drives a [`Game`] from console input.
#[derive(Debug)]
pub struct Console<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console around a game that has not been dealt yet.
    pub const fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the console and returns the game.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Runs a whole session: asks for the name once, then plays rounds until
    /// the player declines another one.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends in the middle of a
    /// round, or the engine rejects a transition.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        let name = self.ask_name()?;
        self.game.set_player_name(name);

        loop {
            self.play_round()?;

            if !self.play_again()? {
                writeln!(self.output, "Goodbye!")?;
                self.output.flush()?;
                return Ok(());
            }

            writeln!(self.output, "Starting new game...")?;
            writeln!(self.output)?;
            self.game.new_round();
        }
    }

    /// Plays one round from the deal to the outcome and announces it.
    ///
    /// # Errors
    ///
    /// Same as [`Console::run`].
    pub fn play_round(&mut self) -> Result<Outcome, ConsoleError> {
        self.game.deal_cards()?;
        self.show_flop()?;

        if let Some(outcome) = self.player_turn()? {
            return self.announce(outcome);
        }
        if let Some(outcome) = self.dealer_turn()? {
            return self.announce(outcome);
        }

        let outcome = self.game.resolve_outcome()?;
        self.announce(outcome)
    }

    fn ask_name(&mut self) -> Result<String, ConsoleError> {
        writeln!(self.output, "=> What is your name?")?;
        self.output.flush()?;
        self.read_line()?.ok_or(ConsoleError::InputClosed)
    }

    fn show_flop(&mut self) -> Result<(), ConsoleError> {
        let target = self.game.options.blackjack;
        write!(self.output, "{}", self.game.player().flop_against(target))?;
        writeln!(self.output)?;
        write!(self.output, "{}", self.game.dealer().flop_against(target))?;
        Ok(())
    }

    fn player_turn(&mut self) -> Result<Option<Outcome>, ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}'s turn.", self.game.player().name())?;

        if let GameState::Resolved(outcome) = self.game.begin_player_turn()? {
            return Ok(Some(outcome));
        }

        loop {
            writeln!(self.output, "=> Do you wish to 1) hit or 2) stay?")?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(ConsoleError::InputClosed)?;
            let Ok(action) = line.parse::<PlayerAction>() else {
                writeln!(self.output, "=> Try again: enter a 1 to hit or 2 to stay.")?;
                writeln!(self.output, "-------------")?;
                continue;
            };

            match action {
                PlayerAction::Stand => {
                    self.game.stand()?;
                    let total = self.player_total();
                    let name = self.game.player().name();
                    writeln!(self.output, "{name} chose to stay at {total}.")?;
                    return Ok(None);
                }
                PlayerAction::Hit => {
                    let card = self.game.hit()?;
                    let total = self.player_total();
                    let name = self.game.player().name();
                    writeln!(self.output, "Dealing card to {name}: {card}")?;
                    writeln!(self.output, "{name}'s total is now: {total}")?;

                    if let Some(outcome) = self.game.outcome() {
                        return Ok(Some(outcome));
                    }
                }
            }
        }
    }

    fn dealer_turn(&mut self) -> Result<Option<Outcome>, ConsoleError> {
        writeln!(self.output, "Dealer's turn.")?;

        loop {
            match self.game.dealer_step()? {
                DealerStep::Hit(card) => {
                    let total = self.dealer_total();
                    writeln!(self.output, "Dealing card to Dealer: {card}")?;
                    writeln!(self.output, "Dealer total is now: {total}")?;

                    if let Some(outcome) = self.game.outcome() {
                        return Ok(Some(outcome));
                    }
                }
                DealerStep::Stand => {
                    let total = self.dealer_total();
                    writeln!(self.output, "Dealer stays at {total}.")?;
                    return Ok(None);
                }
                DealerStep::Finished(outcome) => return Ok(Some(outcome)),
            }
        }
    }

    fn announce(&mut self, outcome: Outcome) -> Result<Outcome, ConsoleError> {
        let total = self.player_total();
        let name = self.game.player().name();
        match outcome {
            Outcome::PlayerBlackjack => writeln!(self.output, "{name} hit blackjack!")?,
            Outcome::DealerBlackjack => {
                writeln!(self.output, "Sorry, Dealer hit blackjack. {name} loses!")?;
            }
            Outcome::PlayerBust => {
                writeln!(self.output, "{name} busted. Better luck next time!")?;
            }
            Outcome::DealerBust => {
                writeln!(self.output, "Congratulations! Dealer busted - {name} wins!")?;
            }
            Outcome::PlayerWins => writeln!(self.output, "Congratulations {name} - you win!!!")?,
            Outcome::DealerWins => {
                writeln!(self.output, "Sorry, {name} loses - maybe next time!")?;
            }
            Outcome::Push => writeln!(
                self.output,
                "It's a push! The Dealer and {name} both have {total}."
            )?,
        }
        Ok(outcome)
    }

    /// Anything but `1`, including closed input, declines.
    fn play_again(&mut self) -> Result<bool, ConsoleError> {
        writeln!(self.output, "Do you want to play again? 1) yes 2) no, exit.")?;
        self.output.flush()?;

        let answer = self.read_line()?;
        Ok(answer.is_some_and(|line| line.trim() == REPLAY_YES))
    }

    fn player_total(&self) -> u8 {
        self.game
            .player()
            .hand()
            .total_against(self.game.options.blackjack)
    }

    fn dealer_total(&self) -> u8 {
        self.game
            .dealer()
            .hand()
            .total_against(self.game.options.blackjack)
    }

    /// Reads one line without its line ending; `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
