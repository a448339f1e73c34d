//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when converting boundary values into cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit value is not in `0..4`.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
    /// Rank value is outside the deck's range.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// A bounds-checked read went past the end of a board or hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for length {len}")]
pub struct IndexOutOfRange {
    /// The requested index.
    pub index: usize,
    /// The length of the collection.
    pub len: usize,
}

/// Errors that can occur when playing or dropping a card.
///
/// None of these mutate the hand, the board or any pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Invalid round state for this move.
    #[error("invalid round state for this move")]
    InvalidState,
    /// Hand index is out of range.
    #[error("hand index out of range")]
    InvalidHandIndex,
    /// A board index is out of range.
    #[error("board index out of range")]
    InvalidBoardIndex,
    /// The same board index was given more than once.
    #[error("board index given more than once")]
    DuplicateBoardIndex,
    /// Board cards do not add up to the played card's rank.
    #[error("board cards do not add up to the played card")]
    SumMismatch,
    /// A board card matches the played card directly and must be taken alone.
    #[error("a direct rank match must be taken instead of a combination")]
    MustTakeDirectMatch,
    /// The hand has no cards to play.
    #[error("hand is empty")]
    EmptyHand,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Players still hold cards.
    #[error("players still hold cards")]
    HandsNotEmpty,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The cards left after the opening deal do not split into whole redeals.
    #[error("deck does not split into whole deals")]
    UnevenDeck,
}

/// Errors that can occur when scoring a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Cards remain in the deck or in a hand.
    #[error("round is not over")]
    RoundNotOver,
}

/// Errors that can occur when recording rounds into a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The round has not been scored yet.
    #[error("round has not been scored")]
    RoundNotScored,
    /// The match already has a winner.
    #[error("match is already over")]
    GameOver,
    /// The round's points were already added to the match.
    #[error("round has already been recorded")]
    AlreadyRecorded,
}
