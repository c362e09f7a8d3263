//! Player and dealer hand representations.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{ParseAceValueError, ValuationError};
use crate::options::DealerAceRule;

/// Totals below this let an ace be lifted to 11.
const ACE_CHOICE_BELOW: u8 = 11;

/// The best total a hand can reach without busting.
pub const BLACKJACK: u8 = 21;

/// The participant a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The interactive player.
    Player,
    /// The automated dealer.
    Dealer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
        })
    }
}

/// The value the player picks for the first ace of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AceValue {
    /// Hard ace.
    One,
    /// Soft ace.
    Eleven,
}

impl AceValue {
    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Eleven => 11,
        }
    }
}

impl FromStr for AceValue {
    type Err = ParseAceValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::One),
            "11" => Ok(Self::Eleven),
            _ => Err(ParseAceValueError),
        }
    }
}

/// Returns whether the first ace of a hand is open to be valued 11.
#[must_use]
pub const fn needs_ace_choice(base: u8, aces: u8) -> bool {
    base < ACE_CHOICE_BELOW && aces > 0
}

/// Values a dealer hand from its non-ace sum and its ace count.
///
/// With a low base, one ace is lifted to 11 when that lands closer to 21
/// without busting; every other ace counts 1. With a base of 11 or more no ace
/// is lifted, and `rule` decides whether a lone ace still counts 1.
#[must_use]
pub fn dealer_value(base: u8, aces: u8, rule: DealerAceRule) -> u8 {
    if aces == 0 {
        return base;
    }

    let lifted: u8 = if base < ACE_CHOICE_BELOW {
        let diff_one = i16::from(BLACKJACK) - (i16::from(base) + i16::from(aces));
        let diff_eleven = i16::from(BLACKJACK) - (i16::from(base) + i16::from(aces) + 10);

        if diff_eleven < diff_one && diff_eleven > -1 {
            11
        } else {
            1
        }
    } else {
        0
    };

    let first = match (lifted, rule) {
        (0, DealerAceRule::Standard) => 1,
        _ => lifted,
    };

    base.saturating_add(first).saturating_add(aces - 1)
}

/// Values a player hand once the first ace has been decided.
#[must_use]
pub const fn player_value(base: u8, aces: u8, first_ace: AceValue) -> u8 {
    if aces == 0 {
        return base;
    }

    base.saturating_add(first_ace.value()).saturating_add(aces - 1)
}

/// Cards held by one participant, in the order they were dealt.
///
/// Totals are never cached: every call re-values the whole hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    role: Role,
}

impl Hand {
    /// Creates an empty hand for `role`.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            cards: Vec::new(),
            role,
        }
    }

    /// Creates an empty player hand.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Role::Player)
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Role::Dealer)
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer's hand.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of aces.
    #[must_use]
    pub fn ace_count(&self) -> u8 {
        self.cards.iter().filter(|card| card.is_ace()).count() as u8
    }

    /// Returns the sum of every card's weight. Aces add nothing.
    #[must_use]
    pub fn base_value(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |sum, card| sum.saturating_add(card.value()))
    }

    /// Values a dealer hand. No input is involved.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not the dealer's hand.
    pub fn dealer_total(&self, rule: DealerAceRule) -> Result<u8, ValuationError> {
        self.expect_role(Role::Dealer)?;

        let (base, aces) = (self.base_value(), self.ace_count());
        let total = dealer_value(base, aces, rule);
        log::debug!("dealer hand: base {base}, {aces} ace(s), total {total}");
        Ok(total)
    }

    /// Values a player hand.
    ///
    /// When the first ace could count as 11, `choose_first_ace` is called with
    /// the total that counts it as nothing and every other ace as 1. It is
    /// asked again on every call, even if it answered for the same ace before.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not the player's hand, or whatever the
    /// chooser fails with.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{AceValue, Card, Hand, Rank, Suit, ValuationError};
    ///
    /// let mut hand = Hand::player();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spade));
    /// hand.add_card(Card::new(Rank::King, Suit::Heart));
    ///
    /// let total = hand.player_total(|_| Ok::<_, ValuationError>(AceValue::Eleven));
    /// assert_eq!(total, Ok(21));
    /// ```
    pub fn player_total<F, E>(&self, mut choose_first_ace: F) -> Result<u8, E>
    where
        F: FnMut(u8) -> Result<AceValue, E>,
        E: From<ValuationError>,
    {
        self.expect_role(Role::Player)?;

        let (base, aces) = (self.base_value(), self.ace_count());
        let first_ace = if needs_ace_choice(base, aces) {
            choose_first_ace(base.saturating_add(aces - 1))?
        } else {
            AceValue::One
        };

        let total = player_value(base, aces, first_ace);
        log::debug!("player hand: base {base}, {aces} ace(s), total {total}");
        Ok(total)
    }

    const fn expect_role(&self, expected: Role) -> Result<(), ValuationError> {
        match (self.role, expected) {
            (Role::Player, Role::Player) | (Role::Dealer, Role::Dealer) => Ok(()),
            (found, expected) => Err(ValuationError::WrongRole { expected, found }),
        }
    }
}

/// Lists the hand one card per line. The dealer's first card stays hidden.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let skip = match self.role {
            Role::Player => {
                writeln!(f, "Player's hand")?;
                0
            }
            Role::Dealer => {
                writeln!(f, "Dealer's Hand (Card 1 is hidden)")?;
                1
            }
        };

        for (index, card) in self.cards.iter().enumerate().skip(skip) {
            writeln!(f, "Card {} -- {card}", index + 1)?;
        }
        Ok(())
    }
}
