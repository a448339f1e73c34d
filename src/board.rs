//! The shared face-up cards available for capture.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::IndexOutOfRange;

/// Face-up cards on the table.
///
/// Indices are stable for the duration of one decision: nothing reorders
/// the board except removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the board.
    pub fn add_to_board(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the cards at `indices` and returns them in board order.
    ///
    /// Indices may come in any order and are removed from highest to lowest,
    /// so no removal shifts a pending one. Out-of-range and repeated indices
    /// are ignored.
    pub fn remove_cards(&mut self, indices: &[usize]) -> Vec<Card> {
        let mut valid: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.cards.len())
            .collect();
        valid.sort_unstable_by(|a, b| b.cmp(a));
        valid.dedup();

        let mut removed: Vec<Card> = valid.into_iter().map(|i| self.cards.remove(i)).collect();
        removed.reverse();
        removed
    }

    /// Removes and returns every card on the board.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the board.
    pub fn card(&self, index: usize) -> Result<Card, IndexOutOfRange> {
        self.cards.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Returns the cards on the board.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
