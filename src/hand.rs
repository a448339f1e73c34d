//! A player's hand and the capture rules applied when it plays.

use alloc::vec::Vec;

use crate::board::Board;
use crate::card::Card;
use crate::error::{IndexOutOfRange, MoveError};
use crate::search::{self, rank_sum};

/// The cards moved by a successful capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// The card played from the hand.
    pub played: Card,
    /// The board cards taken, in board order.
    pub taken: Vec<Card>,
    /// Whether the capture left the board empty.
    pub swept: bool,
}

impl Capture {
    /// Returns every card the capturing player keeps: the played card first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        core::iter::once(self.played).chain(self.taken.iter().copied())
    }
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the hand.
    pub fn card(&self, index: usize) -> Result<Card, IndexOutOfRange> {
        self.cards.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
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

    /// Returns the index of the lowest-ranked card, the first one on ties.
    #[must_use]
    pub fn lowest_card_index(&self) -> Option<usize> {
        self.cards
            .iter()
            .enumerate()
            .min_by_key(|&(i, c)| (c.rank, i))
            .map(|(i, _)| i)
    }

    /// Checks a capture without performing it.
    ///
    /// The checks run in order: hand index, board indices, repeated board
    /// indices, rank sum, then the direct-match rule (a combination is not
    /// allowed while a board card matches the played rank).
    ///
    /// # Errors
    ///
    /// Returns the first rule the capture breaks.
    pub fn validate_capture(
        &self,
        hand_index: usize,
        board_indices: &[usize],
        board: &Board,
    ) -> Result<Card, MoveError> {
        let played = *self
            .cards
            .get(hand_index)
            .ok_or(MoveError::InvalidHandIndex)?;

        if board_indices.iter().any(|&i| i >= board.len()) {
            return Err(MoveError::InvalidBoardIndex);
        }

        let mut sorted = board_indices.to_vec();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(MoveError::DuplicateBoardIndex);
        }

        let cards = board.cards();
        let sum = rank_sum(board_indices.iter().map(|&i| &cards[i]));
        if board_indices.is_empty() || sum != u32::from(played.rank) {
            return Err(MoveError::SumMismatch);
        }

        if board_indices.len() > 1 && search::has_direct_match(played.rank, cards) {
            return Err(MoveError::MustTakeDirectMatch);
        }

        Ok(played)
    }

    /// Plays the card at `hand_index`, capturing the board cards at
    /// `board_indices`.
    ///
    /// On success the taken cards leave the board and the played card
    /// leaves the hand. Both are returned; adding them to a pile is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture breaks a rule (see
    /// [`Hand::validate_capture`]). Nothing is changed in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use shkuba::{Board, Card, Hand, MoveError, Suit};
    ///
    /// let mut board = Board::new();
    /// for rank in [4, 5, 9] {
    ///     board.add_to_board(Card::new(Suit::Clubs, rank));
    /// }
    /// let mut hand = Hand::new();
    /// hand.add_to_hand(Card::new(Suit::Hearts, 9));
    ///
    /// assert_eq!(
    ///     hand.play_card(0, &[0, 1], &mut board).unwrap_err(),
    ///     MoveError::MustTakeDirectMatch
    /// );
    /// let capture = hand.play_card(0, &[2], &mut board).unwrap();
    /// assert_eq!(capture.taken, vec![Card::new(Suit::Clubs, 9)]);
    /// assert!(hand.is_empty());
    /// ```
    pub fn play_card(
        &mut self,
        hand_index: usize,
        board_indices: &[usize],
        board: &mut Board,
    ) -> Result<Capture, MoveError> {
        let played = self.validate_capture(hand_index, board_indices, board)?;

        let taken = board.remove_cards(board_indices);
        self.cards.remove(hand_index);

        Ok(Capture {
            played,
            taken,
            swept: board.is_empty(),
        })
    }

    /// Moves the card at `hand_index` face-up onto the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidHandIndex`] if `hand_index` is out of
    /// range.
    pub fn drop_card(&mut self, hand_index: usize, board: &mut Board) -> Result<Card, MoveError> {
        if hand_index >= self.cards.len() {
            return Err(MoveError::InvalidHandIndex);
        }

        let dropped = self.cards.remove(hand_index);
        board.add_to_board(dropped);
        Ok(dropped)
    }

    /// Lists every legal capture for the card at `hand_index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidHandIndex`] if `hand_index` is out of
    /// range.
    pub fn capture_options(
        &self,
        hand_index: usize,
        board: &Board,
    ) -> Result<Vec<Vec<usize>>, MoveError> {
        let card = self
            .cards
            .get(hand_index)
            .ok_or(MoveError::InvalidHandIndex)?;
        Ok(search::capture_subsets(card.rank, board.cards()))
    }

    /// Returns whether any card in the hand can capture something.
    #[must_use]
    pub fn can_capture(&self, board: &Board) -> bool {
        self.cards
            .iter()
            .any(|c| !search::capture_subsets(c.rank, board.cards()).is_empty())
    }
}
