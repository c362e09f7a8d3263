//! Game configuration options.

/// How a dealer hand counts an ace when the rest of the hand is already 11 or
/// more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealerAceRule {
    /// Every ace counts at least 1.
    #[default]
    Standard,
    /// The first ace counts 0 and any further aces 1 each.
    Literal,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_round::{DealerAceRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_dealer_ace_rule(DealerAceRule::Literal);
/// assert_eq!(options.dealer_ace_rule, DealerAceRule::Literal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer stops drawing once their total reaches this value.
    pub dealer_stands_on: u8,
    /// Ace counting rule for the dealer's hand.
    pub dealer_ace_rule: DealerAceRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            dealer_ace_rule: DealerAceRule::Standard,
        }
    }
}

impl GameOptions {
    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the dealer's ace counting rule.
    #[must_use]
    pub const fn with_dealer_ace_rule(mut self, rule: DealerAceRule) -> Self {
        self.dealer_ace_rule = rule;
        self
    }
}
