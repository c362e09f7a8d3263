//! Round result types.

use core::fmt;

use crate::card::Card;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player went over 21; the dealer never drew.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished higher.
    PlayerWins,
    /// Dealer finished higher.
    DealerWins,
    /// Equal totals.
    Draw,
}

impl RoundOutcome {
    /// Compares two final totals, neither of which is a player bust.
    #[must_use]
    pub const fn settle(player_total: u8, dealer_total: u8) -> Self {
        if dealer_total > crate::hand::BLACKJACK {
            Self::DealerBust
        } else if player_total > dealer_total {
            Self::PlayerWins
        } else if player_total < dealer_total {
            Self::DealerWins
        } else {
            Self::Draw
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// The line announced at the end of the round.
impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "Player busts! Dealer wins.",
            Self::DealerBust => "Dealer Busts! Player wins.",
            Self::PlayerWins => "Player Wins!",
            Self::DealerWins => "Dealer Wins!",
            Self::Draw => "Draw!",
        })
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Cards the dealer drew after the deal.
    pub dealer_draws: Vec<Card>,
}
