use tracing::debug;

use crate::error::DealError;
use crate::options::{HAND_SIZE, OPENING_BOARD_SIZE};

use super::{Player, Round, RoundState};

impl Round {
    /// Moves `count` cards from the deck to `player`'s hand.
    ///
    /// Callers check the deck size first.
    fn deal_to_hand(&mut self, player: Player, count: usize) -> Result<(), DealError> {
        for _ in 0..count {
            let card = self.deck.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.hand_and_board_mut(player).0.add_to_hand(card);
        }
        Ok(())
    }

    fn deal_to_board(&mut self, count: usize) -> Result<(), DealError> {
        for _ in 0..count {
            let card = self.deck.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.board.add_to_board(card);
        }
        Ok(())
    }

    /// Performs the opening deal.
    ///
    /// With `choice == false` the start card joins the board, each hand gets
    /// [`HAND_SIZE`] cards and the board is topped up to
    /// [`OPENING_BOARD_SIZE`]. With `choice == true` the start card goes to
    /// the first player's hand, both hands are filled to [`HAND_SIZE`] and
    /// [`OPENING_BOARD_SIZE`] cards are laid on the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening deal already happened or the deck is
    /// too small for it.
    pub fn first_mini_round(&mut self, choice: bool) -> Result<(), DealError> {
        if self.state != RoundState::AwaitingFirstChoice {
            return Err(DealError::InvalidState);
        }
        let Some(start_card) = self.start_card else {
            return Err(DealError::InvalidState);
        };

        let cards_needed = 2 * HAND_SIZE + OPENING_BOARD_SIZE - 1;
        if self.deck.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        self.start_card = None;
        if choice {
            let first = self.first_player;
            self.hand_and_board_mut(first).0.add_to_hand(start_card);
            self.deal_to_hand(first.other(), 1)?;
            for _ in 1..HAND_SIZE {
                self.deal_to_hand(Player::P1, 1)?;
                self.deal_to_hand(Player::P2, 1)?;
            }
            self.deal_to_board(OPENING_BOARD_SIZE)?;
        } else {
            self.board.add_to_board(start_card);
            for _ in 0..HAND_SIZE {
                self.deal_to_hand(Player::P1, 1)?;
                self.deal_to_hand(Player::P2, 1)?;
            }
            self.deal_to_board(OPENING_BOARD_SIZE - 1)?;
        }

        self.state = RoundState::Playing;
        debug!(
            choice,
            %start_card,
            first_player = ?self.first_player,
            remaining = self.deck.len(),
            "opening deal"
        );
        Ok(())
    }

    /// Deals [`HAND_SIZE`] fresh cards to each player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, either hand still
    /// holds cards, or the deck cannot fill both hands.
    pub fn give_cards_to_players(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Playing {
            return Err(DealError::InvalidState);
        }
        if !self.p1_hand.is_empty() || !self.p2_hand.is_empty() {
            return Err(DealError::HandsNotEmpty);
        }
        if self.deck.len() < 2 * HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..HAND_SIZE {
            self.deal_to_hand(Player::P1, 1)?;
            self.deal_to_hand(Player::P2, 1)?;
        }

        debug!(remaining = self.deck.len(), "dealt fresh hands");
        Ok(())
    }
}
