//! Error types for game operations.

use std::io;

use thiserror::Error;

use crate::hand::Role;

/// Errors that can occur while building or dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck already holds cards.
    #[error("deck has already been generated")]
    AlreadyGenerated,
    /// The deck has no cards to shuffle yet.
    #[error("deck has not been generated")]
    NotGenerated,
    /// The deck has already been shuffled once.
    #[error("deck has already been shuffled")]
    AlreadyShuffled,
    /// Cards have already been dealt from the deck.
    #[error("cannot shuffle after dealing has begun")]
    ShuffleAfterDeal,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while valuing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// The hand was valued with the other participant's algorithm.
    #[error("{found} hand cannot be valued as a {expected} hand")]
    WrongRole {
        /// Role the valuation was written for.
        expected: Role,
        /// Role of the hand that was passed in.
        found: Role,
    },
}

/// Input that is not one of `stay`, `hit` or `view-hand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected one of stay, hit, view-hand")]
pub struct ParseActionError;

/// Input that is not `1` or `11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 1 or 11")]
pub struct ParseAceValueError;

/// Errors that end a round.
#[derive(Debug, Error)]
pub enum GameError {
    /// The operation is not valid in the current game state.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Input ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
    /// Deck invariant violated.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Hand valuation invariant violated.
    #[error(transparent)]
    Valuation(#[from] ValuationError),
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}
