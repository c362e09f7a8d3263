//! Game engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::{AceValue, Hand, Role};
use crate::options::GameOptions;
use crate::result::{RoundOutcome, RoundResult};
use crate::table::Table;

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, GameState};

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck, both hands, and the [`Table`] it talks through.
/// Rounds are not replayable: build a new `Game` for the next one.
///
/// # Example
///
/// ```
/// use blackjack_round::{Card, Console, Deck, Game, GameOptions, Rank, RoundOutcome, Suit};
///
/// // Dealt from the end: player 10, 7; dealer 10, 8.
/// let deck = Deck::from_cards(vec![
///     Card::new(Rank::Eight, Suit::Club),
///     Card::new(Rank::Ten, Suit::Club),
///     Card::new(Rank::Seven, Suit::Heart),
///     Card::new(Rank::Ten, Suit::Heart),
/// ]);
/// let console = Console::new(&b"stay\n"[..], Vec::new());
/// let mut game = Game::with_deck(GameOptions::default(), deck, console);
///
/// let result = game.play_round().unwrap();
/// assert_eq!(result.outcome, RoundOutcome::DealerWins);
/// ```
#[derive(Debug)]
pub struct Game<T> {
    deck: Deck,
    options: GameOptions,
    state: GameState,
    player: Hand,
    dealer: Hand,
    player_total: u8,
    dealer_total: u8,
    dealer_draws: Vec<Card>,
    outcome: Option<RoundOutcome>,
    table: T,
}

impl<T: Table> Game<T> {
    /// Creates a round dealt from a fresh deck shuffled with `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, table: T) -> Self {
        Self::with_deck(options, Deck::standard(seed), table)
    }

    /// Creates a round dealt from `deck`.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, table: T) -> Self {
        Self {
            deck,
            options,
            state: GameState::Dealing,
            player: Hand::player(),
            dealer: Hand::dealer(),
            player_total: 0,
            dealer_total: 0,
            dealer_draws: Vec::new(),
            outcome: None,
            table,
        }
    }

    /// Plays the whole round: deal, player turn, dealer turn and showdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started, the deck runs out,
    /// or the table fails.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        self.deal()?;
        self.player_turn()?;

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
            self.showdown()?;
        }

        self.result().ok_or(GameError::InvalidState)
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealing state, the deck runs
    /// out, or the table fails.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::Dealing)?;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
        }
        self.player_total = self.value_player_hand()?;
        self.show_hand(Role::Player)?;
        self.say(&format!(
            "Player total after initial deals: {}",
            self.player_total
        ))?;
        self.say("")?;

        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }
        self.dealer_total = self.value_dealer_hand()?;
        self.show_hand(Role::Dealer)?;

        self.state = GameState::PlayerTurn;
        log::info!(
            "dealt: player {}, dealer {}",
            self.player_total,
            self.dealer_total
        );
        Ok(())
    }

    /// Returns the result once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome.map(|outcome| RoundResult {
            outcome,
            player_total: self.player_total,
            dealer_total: self.dealer_total,
            dealer_draws: self.dealer_draws.clone(),
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options the round is played with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hidden card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's total as of the last valuation.
    #[must_use]
    pub const fn player_total(&self) -> u8 {
        self.player_total
    }

    /// Returns the dealer's total as of the last valuation.
    #[must_use]
    pub const fn dealer_total(&self) -> u8 {
        self.dealer_total
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining_count()
    }

    /// Returns the table the game talks through.
    #[must_use]
    pub const fn table(&self) -> &T {
        &self.table
    }

    /// Consumes the game, returning its table.
    #[must_use]
    pub fn into_table(self) -> T {
        self.table
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState)
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, GameError> {
        Ok(self.deck.deal_card()?)
    }

    fn value_player_hand(&mut self) -> Result<u8, GameError> {
        let table = &mut self.table;
        self.player
            .player_total(|without_first| ask_ace_value(table, without_first))
    }

    fn value_dealer_hand(&self) -> Result<u8, GameError> {
        Ok(self.dealer.dealer_total(self.options.dealer_ace_rule)?)
    }

    fn show_hand(&mut self, role: Role) -> Result<(), GameError> {
        let listing = match role {
            Role::Player => self.player.to_string(),
            Role::Dealer => self.dealer.to_string(),
        };

        self.say("")?;
        self.say(listing.trim_end())?;
        self.say("")
    }

    fn say(&mut self, line: &str) -> Result<(), GameError> {
        self.table.say(line)
    }

    /// Ends the round and announces the outcome.
    fn finish(&mut self, outcome: RoundOutcome) -> Result<(), GameError> {
        self.outcome = Some(outcome);
        self.state = GameState::RoundOver;
        log::info!(
            "round over: {outcome:?} (player {}, dealer {})",
            self.player_total,
            self.dealer_total
        );
        self.say(&outcome.to_string())
    }
}

/// Asks for the first ace's value until the answer is 1 or 11.
fn ask_ace_value<T: Table>(table: &mut T, without_first: u8) -> Result<AceValue, GameError> {
    loop {
        table.say(&format!("Card total without first ace: {without_first}"))?;
        let input = table.ask("Value for first ace (1 or 11): ")?;

        match input.parse::<AceValue>() {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::warn!("rejected ace value {input:?}: {err}");
                table.say("Invalid Input!")?;
            }
        }
    }
}
