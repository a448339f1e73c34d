//! Round result types for scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::round::Player;

/// Scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    /// More cards captured overall.
    MostCards,
    /// More Diamonds captured.
    MostDiamonds,
    /// Holding the seven of Diamonds.
    SevenOfDiamonds,
    /// More sevens captured, sixes breaking a tie.
    Sevens,
}

/// Counts taken from one pile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PileSummary {
    /// Total cards in the pile.
    pub cards: usize,
    /// Diamonds in the pile.
    pub diamonds: usize,
    /// Sevens in the pile.
    pub sevens: usize,
    /// Sixes in the pile.
    pub sixes: usize,
    /// Whether the pile holds the seven of Diamonds.
    pub seven_of_diamonds: bool,
}

impl PileSummary {
    /// Counts a pile in one pass.
    #[must_use]
    pub fn of(pile: &[Card]) -> Self {
        pile.iter().fold(Self::default(), |mut summary, card| {
            summary.cards += 1;
            if card.suit == Suit::Diamonds {
                summary.diamonds += 1;
            }
            match card.rank {
                7 => summary.sevens += 1,
                6 => summary.sixes += 1,
                _ => {}
            }
            summary.seven_of_diamonds |= card.is_seven_of_diamonds();
            summary
        })
    }
}

/// Result for a single scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    /// The category.
    pub category: ScoreCategory,
    /// Who got the point, `None` if it was withheld.
    pub winner: Option<Player>,
}

/// Result of scoring a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    /// Counts for the first player's pile.
    pub p1: PileSummary,
    /// Counts for the second player's pile.
    pub p2: PileSummary,
    /// One entry per category.
    pub awards: Vec<Award>,
    /// Points for the first player.
    pub p1_points: u16,
    /// Points for the second player.
    pub p2_points: u16,
}

impl RoundScore {
    /// Returns the points earned by `player`.
    #[must_use]
    pub const fn points(&self, player: Player) -> u16 {
        match player {
            Player::P1 => self.p1_points,
            Player::P2 => self.p2_points,
        }
    }
}
