//! Heuristic opponent.
//!
//! The bot looks one move ahead and nothing more. Each turn it walks a
//! fixed ladder of preferences that mirrors what scores at the end of a
//! round (sevens, Diamonds, card count):
//!
//! 1. Empty board: drop the lowest card.
//! 2. Any direct rank match. Among several: a seven involving Diamonds, then
//!    a six involving Diamonds, then any seven, then any match involving
//!    Diamonds, then the first match found.
//! 3. A combination: played seven first, then one taking a seven, then the
//!    largest.
//! 4. Otherwise drop the lowest card.

use alloc::vec::Vec;

use tracing::trace;

use crate::board::Board;
use crate::card::{Card, Suit};
use crate::error::MoveError;
use crate::hand::{Capture, Hand};
use crate::search;

/// A move chosen by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotMove {
    /// Play a hand card and take the given board cards.
    Capture {
        /// Index of the card in the hand.
        hand_index: usize,
        /// Indices of the board cards to take.
        board_indices: Vec<usize>,
    },
    /// Put a hand card face-up on the board.
    Drop {
        /// Index of the card in the hand.
        hand_index: usize,
    },
}

/// What happened when the bot acted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotTurn {
    /// The bot captured.
    Captured(Capture),
    /// The bot dropped a card onto the board.
    Dropped(Card),
}

/// The non-human player's decision procedure. It keeps no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bot;

impl Bot {
    /// Creates a bot.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decides whether to take the round's start card into the hand.
    ///
    /// The bot keeps sevens and Diamonds; anything else goes to the board.
    #[must_use]
    pub fn wants_start_card(&self, card: Card) -> bool {
        card.rank == 7 || card.suit == Suit::Diamonds
    }

    /// Chooses a move for `hand` against `board` without changing either.
    ///
    /// Returns `None` only when the hand is empty.
    #[must_use]
    pub fn choose_move(&self, hand: &Hand, board: &Board) -> Option<BotMove> {
        let lowest = hand.lowest_card_index()?;
        let drop_lowest = BotMove::Drop { hand_index: lowest };

        if board.is_empty() {
            trace!(hand_index = lowest, "board empty, dropping lowest card");
            return Some(drop_lowest);
        }

        if let Some(choice) = Self::direct_match(hand, board) {
            trace!(?choice, "taking a direct match");
            return Some(choice);
        }

        if let Some(choice) = Self::best_combination(hand, board) {
            trace!(?choice, "taking a combination");
            return Some(choice);
        }

        trace!(hand_index = lowest, "nothing to capture, dropping lowest card");
        Some(drop_lowest)
    }

    /// Chooses and performs one move.
    ///
    /// Exactly one card leaves the hand on success.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::EmptyHand`] if the hand has no cards.
    pub fn play(&self, hand: &mut Hand, board: &mut Board) -> Result<BotTurn, MoveError> {
        match self.choose_move(hand, board).ok_or(MoveError::EmptyHand)? {
            BotMove::Capture {
                hand_index,
                board_indices,
            } => hand
                .play_card(hand_index, &board_indices, board)
                .map(BotTurn::Captured),
            BotMove::Drop { hand_index } => {
                hand.drop_card(hand_index, board).map(BotTurn::Dropped)
            }
        }
    }

    /// Every (hand index, board index) pair with equal ranks, in scan order.
    fn direct_matches<'a>(
        hand: &'a Hand,
        board: &'a Board,
    ) -> impl Iterator<Item = (usize, usize, Card, Card)> + 'a {
        hand.cards().iter().enumerate().flat_map(move |(j, &h)| {
            board
                .cards()
                .iter()
                .enumerate()
                .filter(move |&(_, b)| b.rank == h.rank)
                .map(move |(i, &b)| (j, i, h, b))
        })
    }

    fn best_combination(hand: &Hand, board: &Board) -> Option<BotMove> {
        let cards = board.cards();
        let mut best: Option<((bool, (bool, bool, usize)), usize, Vec<usize>)> = None;

        for (hand_index, card) in hand.cards().iter().enumerate() {
            // No hand card has a direct match by now.
            let Some(subset) = search::best_capture(card.rank, cards) else {
                continue;
            };
            let key = (card.rank == 7, search::preference(&subset, cards));
            if best.as_ref().is_none_or(|(best_key, ..)| key > *best_key) {
                best = Some((key, hand_index, subset));
            }
        }

        best.map(|(_, hand_index, board_indices)| BotMove::Capture {
            hand_index,
            board_indices,
        })
    }

    /// Picks the most valuable direct match; earlier pairs win ties.
    fn direct_match(hand: &Hand, board: &Board) -> Option<BotMove> {
        let mut best: Option<(u8, usize, usize)> = None;

        for (j, i, h, b) in Self::direct_matches(hand, board) {
            let diamond = h.suit == Suit::Diamonds || b.suit == Suit::Diamonds;
            let priority = match (h.rank, diamond) {
                (7, true) => 5,
                (6, true) => 4,
                (7, false) => 3,
                (_, true) => 2,
                _ => 1,
            };
            if best.is_none_or(|(best_priority, ..)| priority > best_priority) {
                best = Some((priority, j, i));
            }
        }

        best.map(|(_, hand_index, board_index)| BotMove::Capture {
            hand_index,
            board_indices: alloc::vec![board_index],
        })
    }
}
