use crate::card::Card;
use crate::error::GameError;
use crate::result::{RoundOutcome, RoundResult};
use crate::table::Table;

use super::{Game, GameState};

impl<T: Table> Game<T> {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hidden card and draws until their total
    /// reaches [`GameOptions::dealer_stands_on`](crate::GameOptions), 17 by
    /// default. A dealer already at or above it draws nothing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state, the deck is
    /// empty while the dealer must draw, or the table fails.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_state(GameState::DealerTurn)?;

        self.say("")?;
        if let Some(hidden) = self.dealer.cards().first().copied() {
            self.say(&format!("Dealer hidden card: {hidden}"))?;
        }
        self.say(&format!("Dealer current total: {}", self.dealer_total))?;

        let mut drawn_cards = Vec::new();
        while self.dealer_total < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.add_card(card);
            self.dealer_total = self.value_dealer_hand()?;
            drawn_cards.push(card);

            self.say(&format!("Dealer receives: {card}"))?;
            self.say(&format!("Dealer new total: {}", self.dealer_total))?;
        }
        self.say(&format!("Dealer final total: {}", self.dealer_total))?;

        log::info!(
            "dealer drew {} card(s), stands on {}",
            drawn_cards.len(),
            self.dealer_total
        );
        self.dealer_draws.extend_from_slice(&drawn_cards);
        self.state = GameState::Showdown;

        Ok(drawn_cards)
    }

    /// Compares the final totals and ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in showdown state or the table
    /// fails.
    pub fn showdown(&mut self) -> Result<RoundResult, GameError> {
        self.ensure_state(GameState::Showdown)?;

        let outcome = RoundOutcome::settle(self.player_total, self.dealer_total);

        self.say("")?;
        if outcome != RoundOutcome::DealerBust {
            self.say(&format!(
                "Player Total: {}, Dealer Total: {}",
                self.player_total, self.dealer_total
            ))?;
        }
        self.finish(outcome)?;

        self.result().ok_or(GameError::InvalidState)
    }
}
