//! Game configuration options.

/// The hand total that wins outright.
pub const BLACKJACK: u8 = 21;

/// The total at which the dealer stops drawing.
pub const DEALER_STAND: u8 = 17;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjconsole::GameOptions;
///
/// let options = GameOptions::default().with_dealer_stand(16);
/// assert_eq!(options.blackjack, 21);
/// assert_eq!(options.dealer_stand, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Hand total that counts as blackjack; anything above it busts.
    pub blackjack: u8,
    /// Dealer keeps drawing while its total is below this value.
    pub dealer_stand: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            blackjack: BLACKJACK,
            dealer_stand: DEALER_STAND,
        }
    }
}

impl GameOptions {
    /// Sets the blackjack target.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack(31);
    /// assert_eq!(options.blackjack, 31);
    /// ```
    #[must_use]
    pub const fn with_blackjack(mut self, target: u8) -> Self {
        self.blackjack = target;
        self
    }

    /// Sets the dealer stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand(18);
    /// assert_eq!(options.dealer_stand, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand(mut self, threshold: u8) -> Self {
        self.dealer_stand = threshold;
        self
    }
}
