//! Round outcome types.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player's hand reached exactly 21.
    PlayerBlackjack,
    /// The dealer's hand reached exactly 21.
    DealerBlackjack,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Both stood and the player's total is higher.
    PlayerWins,
    /// Both stood and the dealer's total is higher.
    DealerWins,
    /// Both stood on the same total.
    Push,
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Tie.
    Push,
}

impl Outcome {
    /// Returns the result from the player's side.
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins => Verdict::Win,
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWins => Verdict::Lose,
            Self::Push => Verdict::Push,
        }
    }

    /// Returns whether the round ended before both sides finished their turns.
    #[must_use]
    pub const fn ended_early(self) -> bool {
        !matches!(self, Self::PlayerWins | Self::DealerWins | Self::Push)
    }
}
