//! One deal of the game, from the start card to scoring.

use alloc::vec::Vec;

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, IndexOutOfRange};
use crate::hand::Hand;
use crate::options::{GameOptions, HAND_SIZE, OPENING_BOARD_SIZE};

mod deal;
mod scoring;
pub mod state;
mod turn;

pub use scoring::score_piles;
pub use state::{Player, RoundState};

/// A single round: the deck, both hands, the board and both capture piles.
///
/// The round checks whether each submitted move is legal but does not
/// decide whose turn it is; that belongs to the host.
///
/// # Example
///
/// ```
/// use shkuba::{GameOptions, Player, Round};
///
/// let mut round = Round::new(Player::P1, GameOptions::default(), 42);
/// round.first_mini_round(false).unwrap();
/// assert_eq!(round.hand(Player::P1).len(), 3);
/// assert_eq!(round.board().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Game options.
    options: GameOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// Face-up cards.
    board: Board,
    p1_hand: Hand,
    p2_hand: Hand,
    p1_pile: Vec<Card>,
    p2_pile: Vec<Card>,
    /// Points from the last scoring.
    p1_points: u16,
    p2_points: u16,
    scored: bool,
    /// Set once a match has added this round's points.
    recorded: bool,
    /// Drawn at construction; leaves the round on the opening deal.
    start_card: Option<Card>,
    first_player: Player,
    /// Who captured last; collects the board at the end.
    last_capturer: Option<Player>,
    state: RoundState,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    #[expect(
        clippy::missing_panics_doc,
        reason = "both deck kinds split into whole deals"
    )]
    #[must_use]
    pub fn new(first_player: Player, options: GameOptions, seed: u64) -> Self {
        let deck = Deck::new(options.deck, seed);
        Self::with_deck(first_player, options, deck)
            .expect("both deck kinds split into whole deals")
    }

    /// Creates a round with a deck shuffled from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[expect(
        clippy::missing_panics_doc,
        reason = "both deck kinds split into whole deals"
    )]
    #[must_use]
    pub fn from_entropy(first_player: Player, options: GameOptions) -> Self {
        let deck = Deck::from_entropy(options.deck);
        Self::with_deck(first_player, options, deck)
            .expect("both deck kinds split into whole deals")
    }

    /// Creates a round from an explicit deck.
    ///
    /// The start card is drawn from `deck` immediately. The deck must cover
    /// the opening deal, and whatever is left after it must split into
    /// whole redeals of [`HAND_SIZE`] cards per player, so every round can
    /// be played out.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `deck` is smaller than the
    /// opening deal, or [`DealError::UnevenDeck`] if the rest would leave a
    /// short redeal.
    pub fn with_deck(
        first_player: Player,
        options: GameOptions,
        mut deck: Deck,
    ) -> Result<Self, DealError> {
        let opening = 2 * HAND_SIZE + OPENING_BOARD_SIZE;
        if deck.len() < opening {
            return Err(DealError::NotEnoughCards);
        }
        if (deck.len() - opening) % (2 * HAND_SIZE) != 0 {
            return Err(DealError::UnevenDeck);
        }
        let start_card = deck.draw().map_err(|_| DealError::NotEnoughCards)?;

        Ok(Self {
            options,
            deck,
            board: Board::new(),
            p1_hand: Hand::new(),
            p2_hand: Hand::new(),
            p1_pile: Vec::new(),
            p2_pile: Vec::new(),
            p1_points: 0,
            p2_points: 0,
            scored: false,
            recorded: false,
            start_card: Some(start_card),
            first_player,
            last_capturer: None,
            state: RoundState::AwaitingFirstChoice,
        })
    }

    /// Returns the options the round was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns who acts first in the opening deal.
    #[must_use]
    pub const fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the start card while it is still reserved.
    #[must_use]
    pub const fn start_card(&self) -> Option<Card> {
        self.start_card
    }

    /// Returns the cards not yet dealt.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a player's hand.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::P1 => &self.p1_hand,
            Player::P2 => &self.p2_hand,
        }
    }

    /// Returns a player's capture pile.
    #[must_use]
    pub fn pile(&self, player: Player) -> &[Card] {
        match player {
            Player::P1 => &self.p1_pile,
            Player::P2 => &self.p2_pile,
        }
    }

    /// Moves the board card at `board_index` straight onto a player's pile.
    ///
    /// This is a host hook outside the capture rules: no hand card is
    /// played and the last capturer does not change.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `board_index` is past the end of the
    /// board.
    pub fn add_to_pile(
        &mut self,
        player: Player,
        board_index: usize,
    ) -> Result<Card, IndexOutOfRange> {
        let card = self.board.card(board_index)?;
        self.board.remove_cards(&[board_index]);
        self.pile_mut(player).push(card);
        Ok(card)
    }

    /// Returns who captured most recently.
    #[must_use]
    pub const fn last_capturer(&self) -> Option<Player> {
        self.last_capturer
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Returns whether both hands are empty and there is more to deal.
    #[must_use]
    pub fn needs_deal(&self) -> bool {
        self.state == RoundState::Playing
            && self.p1_hand.is_empty()
            && self.p2_hand.is_empty()
            && !self.deck.is_empty()
    }

    /// Returns whether every card has been played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != RoundState::AwaitingFirstChoice
            && self.deck.is_empty()
            && self.p1_hand.is_empty()
            && self.p2_hand.is_empty()
    }

    /// Returns the first player's points from the last scoring.
    #[must_use]
    pub const fn p1_points(&self) -> u16 {
        self.p1_points
    }

    /// Returns the second player's points from the last scoring.
    #[must_use]
    pub const fn p2_points(&self) -> u16 {
        self.p2_points
    }

    /// Returns whether [`Round::count_piles`] has run.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.scored
    }

    /// Returns whether a [`Game`](crate::Game) has recorded this round.
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.recorded
    }

    pub(crate) const fn mark_recorded(&mut self) {
        self.recorded = true;
    }

    /// Returns the number of cards across every zone of the round.
    ///
    /// This always equals the deck size the round started with.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + usize::from(self.start_card.is_some())
            + self.p1_hand.len()
            + self.p2_hand.len()
            + self.board.len()
            + self.p1_pile.len()
            + self.p2_pile.len()
    }

    fn hand_and_board_mut(&mut self, player: Player) -> (&mut Hand, &mut Board) {
        match player {
            Player::P1 => (&mut self.p1_hand, &mut self.board),
            Player::P2 => (&mut self.p2_hand, &mut self.board),
        }
    }

    fn pile_mut(&mut self, player: Player) -> &mut Vec<Card> {
        match player {
            Player::P1 => &mut self.p1_pile,
            Player::P2 => &mut self.p2_pile,
        }
    }
}
