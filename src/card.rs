//! Card types and boundary conversions.

use core::fmt;

use crate::error::CardError;
use crate::options::DeckKind;

/// Card suit.
///
/// The discriminants are the small integers hosts use at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Hearts.
    Hearts = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Clubs.
    Clubs = 3,
}

impl Suit {
    /// All suits in boundary order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spades),
            1 => Ok(Self::Hearts),
            2 => Ok(Self::Diamonds),
            3 => Ok(Self::Clubs),
            other => Err(CardError::InvalidSuit(other)),
        }
    }
}

/// A playing card.
///
/// Cards are plain values: two cards with the same suit and rank are the
/// same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, starting at 1.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function only checks the rank in debug builds, and only
    /// that it is not 0. Ranks above the deck's range are accepted but never
    /// appear in a dealt deck. Use [`Card::from_raw`] for values coming from
    /// outside the engine.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!(rank >= 1, "card ranks start at 1");
        Self { suit, rank }
    }

    /// Builds a card from its boundary representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the suit is not in `0..4` or the rank is outside
    /// the range used by `deck`.
    pub fn from_raw(suit: u8, rank: u8, deck: DeckKind) -> Result<Self, CardError> {
        let suit = Suit::try_from(suit)?;
        if rank == 0 || rank > deck.max_rank() {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }

    /// Returns the boundary representation `(suit, rank)`.
    #[must_use]
    pub const fn to_raw(self) -> (u8, u8) {
        (self.suit as u8, self.rank)
    }

    /// Returns whether this is the seven of Diamonds.
    #[must_use]
    pub fn is_seven_of_diamonds(self) -> bool {
        self.suit == Suit::Diamonds && self.rank == 7
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}
