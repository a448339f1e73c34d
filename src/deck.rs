//! The shuffled stock cards are drawn from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::error::DrawError;
use crate::options::DeckKind;

/// The cards not yet dealt.
///
/// Draws come off the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck and shuffles it with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use shkuba::{Deck, DeckKind};
    ///
    /// let deck = Deck::new(DeckKind::Forty, 42);
    /// assert_eq!(deck.len(), 40);
    /// ```
    #[must_use]
    pub fn new(kind: DeckKind, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(kind, &mut rng)
    }

    /// Creates a full deck shuffled with a generator seeded by the OS.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(kind: DeckKind) -> Self {
        let mut rng = ChaCha8Rng::from_os_rng();
        Self::with_rng(kind, &mut rng)
    }

    fn with_rng(kind: DeckKind, rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(kind.size());

        for suit in Suit::ALL {
            for rank in 1..=kind.max_rank() {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, unshuffled.
    ///
    /// The last card of `cards` is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain. Callers that
    /// expect exhaustion should check [`Deck::is_empty`] first.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the remaining cards, the next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
