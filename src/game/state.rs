//! Game state and player action types.

use core::str::FromStr;

use crate::error::ParseActionError;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing the opening cards.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final and need comparing.
    Showdown,
    /// Round has ended; the outcome is known.
    RoundOver,
}

/// A decision the player can make during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop drawing.
    Stay,
    /// Draw one card.
    Hit,
    /// Show the hand without taking a turn.
    ViewHand,
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stay" => Ok(Self::Stay),
            "hit" => Ok(Self::Hit),
            "view-hand" => Ok(Self::ViewHand),
            _ => Err(ParseActionError),
        }
    }
}
