use alloc::vec::Vec;

use tracing::debug;

use crate::bot::{Bot, BotTurn};
use crate::card::Card;
use crate::error::MoveError;
use crate::hand::Capture;

use super::{Player, Round, RoundState};

impl Round {
    fn ensure_playing(&self) -> Result<(), MoveError> {
        if self.state == RoundState::Playing {
            Ok(())
        } else {
            Err(MoveError::InvalidState)
        }
    }

    fn book_capture(&mut self, player: Player, capture: &Capture) {
        let pile = self.pile_mut(player);
        pile.extend(capture.cards());
        self.last_capturer = Some(player);

        debug!(
            ?player,
            played = %capture.played,
            taken = capture.taken.len(),
            swept = capture.swept,
            "capture"
        );
    }

    /// Plays a card from `player`'s hand, taking the board cards at
    /// `board_indices` into that player's pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played or the capture
    /// breaks a rule. Nothing is changed in that case.
    pub fn play_card(
        &mut self,
        player: Player,
        hand_index: usize,
        board_indices: &[usize],
    ) -> Result<Capture, MoveError> {
        self.ensure_playing()?;

        let (hand, board) = self.hand_and_board_mut(player);
        let capture = hand.play_card(hand_index, board_indices, board)?;
        self.book_capture(player, &capture);

        Ok(capture)
    }

    /// Moves a card from `player`'s hand onto the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played or `hand_index` is
    /// out of range.
    pub fn drop_card(&mut self, player: Player, hand_index: usize) -> Result<Card, MoveError> {
        self.ensure_playing()?;

        let (hand, board) = self.hand_and_board_mut(player);
        let card = hand.drop_card(hand_index, board)?;

        debug!(?player, %card, "drop");
        Ok(card)
    }

    /// Lets the bot take `player`'s turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played or the player's
    /// hand is empty.
    pub fn bot_turn(&mut self, player: Player) -> Result<BotTurn, MoveError> {
        self.ensure_playing()?;

        let (hand, board) = self.hand_and_board_mut(player);
        let turn = Bot::new().play(hand, board)?;

        match &turn {
            BotTurn::Captured(capture) => self.book_capture(player, capture),
            BotTurn::Dropped(card) => debug!(?player, %card, "bot drop"),
        }
        Ok(turn)
    }

    /// Ends play: the board left over goes to whoever captured last.
    ///
    /// Does nothing unless the round is over and not yet finished. If nobody
    /// captured, the board stays where it is. Returns the cards collected.
    pub fn finish(&mut self) -> Vec<Card> {
        if self.state != RoundState::Playing || !self.is_over() {
            return Vec::new();
        }
        self.state = RoundState::Finished;

        let Some(player) = self.last_capturer else {
            debug!(left = self.board.len(), "round finished without captures");
            return Vec::new();
        };

        let remaining = self.board.take_all();
        self.pile_mut(player).extend(remaining.iter().copied());
        debug!(?player, collected = remaining.len(), "round finished");
        remaining
    }
}
