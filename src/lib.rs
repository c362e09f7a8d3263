//! A single round of console blackjack against an automated dealer.
//!
//! The crate provides a [`Game`] type that runs the round flow: the deal,
//! the player's stay/hit decisions, the dealer's draws, and the showdown.
//! Every question the game asks goes through a [`Table`], so a round can be
//! played on the terminal or from a script.
//!
//! Aces follow this game's own scoring: the player names the value of their
//! first ace whenever it could count as 11, while the dealer lifts one ace to
//! 11 only when that lands closer to 21 without busting.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_round::{Console, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42, Console::stdio());
//! let result = game.play_round();
//! let _ = result;
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, GameError, ParseAceValueError, ParseActionError, ValuationError};
pub use game::{Action, Game, GameState};
pub use hand::{AceValue, BLACKJACK, Hand, Role};
pub use options::{DealerAceRule, GameOptions};
pub use result::{RoundOutcome, RoundResult};
pub use table::{Console, Table};
