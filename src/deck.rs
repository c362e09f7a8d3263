//! The deck the round is dealt from.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. The tail of the sequence is the top of the deck.
///
/// The shuffle source is injected so rounds can be reproduced from a seed.
///
/// # Example
///
/// ```
/// use blackjack_round::Deck;
///
/// let mut deck = Deck::standard(7);
/// assert_eq!(deck.remaining_count(), 52);
/// let _card = deck.deal_card().unwrap();
/// assert_eq!(deck.remaining_count(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    shuffled: bool,
    dealt: usize,
}

impl Deck {
    /// Creates an empty deck that shuffles with the given generator.
    #[must_use]
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
            shuffled: false,
            dealt: 0,
        }
    }

    /// Creates an empty deck seeded with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a generated and shuffled 52-card deck.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        let mut deck = Self::with_seed(seed);
        deck.fill();
        deck.shuffle_unchecked();
        deck
    }

    /// Creates a deck in a known order. The last card is dealt first.
    ///
    /// The deck counts as shuffled, so the order is kept.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
            shuffled: true,
            dealt: 0,
        }
    }

    /// Fills the deck with all 52 rank and suit combinations.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is not empty or has been dealt from.
    pub fn generate(&mut self) -> Result<(), DeckError> {
        if !self.cards.is_empty() || self.dealt > 0 {
            return Err(DeckError::AlreadyGenerated);
        }

        self.fill();
        Ok(())
    }

    /// Shuffles the whole deck once.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has already been dealt, the deck has not
    /// been generated, or the deck was already shuffled.
    pub fn shuffle(&mut self) -> Result<(), DeckError> {
        if self.dealt > 0 {
            return Err(DeckError::ShuffleAfterDeal);
        }
        if self.cards.is_empty() {
            return Err(DeckError::NotGenerated);
        }
        if self.shuffled {
            return Err(DeckError::AlreadyShuffled);
        }

        self.shuffle_unchecked();
        Ok(())
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Empty)?;
        self.dealt += 1;
        log::debug!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards left, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn fill(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    fn shuffle_unchecked(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.shuffled = true;
        log::debug!("shuffled {} cards", self.cards.len());
    }
}
