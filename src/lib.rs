//! A Shkuba (Scopa-style) capture card game engine with optional `no_std`
//! support.
//!
//! The crate tracks the deck, the shared board, both hands and both capture
//! piles of a two-player round, decides which board cards a played card may
//! capture, scores finished rounds and drives a simple bot opponent.
//! [`Game`] strings rounds together into a match.
//!
//! # Example
//!
//! ```
//! use shkuba::{GameOptions, Player, Round};
//!
//! let mut round = Round::new(Player::P1, GameOptions::default(), 7);
//! round.first_mini_round(false).unwrap();
//!
//! while !round.is_over() {
//!     if round.needs_deal() {
//!         round.give_cards_to_players().unwrap();
//!     }
//!     for player in [Player::P1, Player::P2] {
//!         round.bot_turn(player).unwrap();
//!     }
//! }
//!
//! let score = round.count_piles().unwrap();
//! assert!(score.p1_points + score.p2_points <= 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod bot;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod search;

// Re-export main types
pub use board::Board;
pub use bot::{Bot, BotMove, BotTurn};
pub use card::{Card, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, DrawError, GameError, IndexOutOfRange, MoveError, ScoreError};
pub use game::Game;
pub use hand::{Capture, Hand};
pub use options::{DeckKind, GameOptions, HAND_SIZE, OPENING_BOARD_SIZE, TieRule};
pub use result::{Award, PileSummary, RoundScore, ScoreCategory};
pub use round::{Player, Round, RoundState};
