use core::cmp::Ordering;

use tracing::debug;

use crate::error::ScoreError;
use crate::options::TieRule;
use crate::result::{Award, PileSummary, RoundScore, ScoreCategory};

use super::{Player, Round};

fn settle(ordering: Ordering, tie_rule: TieRule) -> Option<Player> {
    match ordering {
        Ordering::Greater => Some(Player::P1),
        Ordering::Less => Some(Player::P2),
        Ordering::Equal => match tie_rule {
            TieRule::Withhold => None,
            TieRule::SecondPlayer => Some(Player::P2),
        },
    }
}

/// Scores two piles against each other.
///
/// Each category is settled on its own, so a round is worth between zero
/// and four points in total.
#[must_use]
pub fn score_piles(p1: PileSummary, p2: PileSummary, tie_rule: TieRule) -> RoundScore {
    let seven_of_diamonds = if p1.seven_of_diamonds {
        Some(Player::P1)
    } else if p2.seven_of_diamonds {
        Some(Player::P2)
    } else {
        None
    };

    let awards = alloc::vec![
        Award {
            category: ScoreCategory::MostCards,
            winner: settle(p1.cards.cmp(&p2.cards), tie_rule),
        },
        Award {
            category: ScoreCategory::MostDiamonds,
            winner: settle(p1.diamonds.cmp(&p2.diamonds), tie_rule),
        },
        Award {
            category: ScoreCategory::SevenOfDiamonds,
            winner: seven_of_diamonds,
        },
        Award {
            category: ScoreCategory::Sevens,
            winner: settle(
                p1.sevens.cmp(&p2.sevens).then(p1.sixes.cmp(&p2.sixes)),
                tie_rule,
            ),
        },
    ];

    let count = |player| awards.iter().filter(|a| a.winner == Some(player)).count() as u16;
    let p1_points = count(Player::P1);
    let p2_points = count(Player::P2);

    RoundScore {
        p1,
        p2,
        awards,
        p1_points,
        p2_points,
    }
}

impl Round {
    /// Scores both piles and stores the points.
    ///
    /// Collects the leftover board first (see [`Round::finish`]). Points
    /// are computed from the piles every time, so calling this twice gives
    /// the same totals.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::RoundNotOver`] while the deck or either hand
    /// still holds cards.
    pub fn count_piles(&mut self) -> Result<RoundScore, ScoreError> {
        if !self.is_over() {
            return Err(ScoreError::RoundNotOver);
        }
        self.finish();

        let score = score_piles(
            PileSummary::of(&self.p1_pile),
            PileSummary::of(&self.p2_pile),
            self.options.tie_rule,
        );
        self.p1_points = score.p1_points;
        self.p2_points = score.p2_points;
        self.scored = true;

        debug!(
            p1_points = score.p1_points,
            p2_points = score.p2_points,
            "round scored"
        );
        Ok(score)
    }
}
