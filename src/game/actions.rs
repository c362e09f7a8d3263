use crate::card::Card;
use crate::error::GameError;
use crate::hand::{BLACKJACK, Role};
use crate::result::RoundOutcome;
use crate::table::Table;

use super::{Action, Game, GameState};

impl<T: Table> Game<T> {
    /// Runs the player's turn until they stay or bust.
    ///
    /// `view-hand` shows the hand without using up the turn; anything that is
    /// not a known action is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the deck runs
    /// out, or the table fails.
    pub fn player_turn(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        if self.player_total > BLACKJACK {
            return self.bust();
        }

        while self.state == GameState::PlayerTurn {
            self.say("")?;
            match self.read_action()? {
                Action::Stay => self.stay()?,
                Action::Hit => {
                    self.hit()?;
                }
                Action::ViewHand => self.show_hand(Role::Player)?,
            }
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the deck is
    /// empty, or the table fails.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        let card = self.draw()?;
        self.player.add_card(card);
        self.player_total = self.value_player_hand()?;

        self.say(&format!("Player receives: {card}"))?;
        self.say(&format!("Player current Total: {}", self.player_total))?;

        if self.player_total > BLACKJACK {
            self.bust()?;
        }

        Ok(card)
    }

    /// Player action: Stay (keep current hand) and hand over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the table
    /// fails.
    pub fn stay(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        self.say(&format!("Player Final Total: {}", self.player_total))?;
        self.state = GameState::DealerTurn;
        log::info!("player stays on {}", self.player_total);
        Ok(())
    }

    fn bust(&mut self) -> Result<(), GameError> {
        self.say(&format!("Player Final Total: {}", self.player_total))?;
        self.say("")?;
        self.finish(RoundOutcome::PlayerBust)
    }

    fn read_action(&mut self) -> Result<Action, GameError> {
        loop {
            let input = self
                .table
                .ask("Stay, hit, or view hand? [stay/hit/view-hand]: ")?;

            match input.parse::<Action>() {
                Ok(action) => return Ok(action),
                Err(err) => {
                    log::warn!("rejected action {input:?}: {err}");
                    self.say("Invalid Input.")?;
                }
            }
        }
    }
}
