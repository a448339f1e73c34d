//! Match bookkeeping across rounds.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::GameError;
use crate::options::GameOptions;
use crate::round::{Player, Round};

/// A match played over several rounds until one player reaches the target
/// score.
///
/// The game deals each round from its own random stream, so a match built
/// from the same seed replays the same deals.
///
/// # Example
///
/// ```
/// use shkuba::{Game, GameOptions, Player};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// let mut round = game.new_round().unwrap();
/// round.first_mini_round(false).unwrap();
///
/// while !round.is_over() {
///     if round.needs_deal() {
///         round.give_cards_to_players().unwrap();
///     }
///     for player in [Player::P1, Player::P2] {
///         round.bot_turn(player).unwrap();
///     }
/// }
///
/// let score = round.count_piles().unwrap();
/// game.record_round(&mut round).unwrap();
/// assert_eq!(game.points(Player::P1), score.p1_points);
/// assert_eq!(game.first_player(), Player::P2);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Who opens the next round.
    first_player: Player,
    p1_points: u16,
    p2_points: u16,
    rounds_played: usize,
    /// Random number generator for round seeds.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new match with the given seed. The first player opens.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new match seeded from the OS.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    const fn with_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            first_player: Player::P1,
            p1_points: 0,
            p2_points: 0,
            rounds_played: 0,
            rng,
        }
    }

    /// Returns who opens the next round.
    #[must_use]
    pub const fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns a player's match total.
    #[must_use]
    pub const fn points(&self, player: Player) -> u16 {
        match player {
            Player::P1 => self.p1_points,
            Player::P2 => self.p2_points,
        }
    }

    /// Returns how many rounds have been recorded.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the winner once a player has reached the target score and
    /// leads. Level totals keep the match going.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let target = self.options.target_score;
        if self.p1_points.max(self.p2_points) < target {
            return None;
        }
        match self.p1_points.cmp(&self.p2_points) {
            core::cmp::Ordering::Greater => Some(Player::P1),
            core::cmp::Ordering::Less => Some(Player::P2),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Returns whether the match has a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Starts the next round, opened by [`Game::first_player`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the match already has a winner.
    pub fn new_round(&mut self) -> Result<Round, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let seed = self.rng.next_u64();
        Ok(Round::new(self.first_player, self.options.clone(), seed))
    }

    /// Adds a scored round's points to the match totals and hands the
    /// opening to the other player.
    ///
    /// Each round counts once; the round is marked as recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over, the round has not been scored
    /// with [`Round::count_piles`], or it was already recorded.
    pub fn record_round(&mut self, round: &mut Round) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !round.is_scored() {
            return Err(GameError::RoundNotScored);
        }
        if round.is_recorded() {
            return Err(GameError::AlreadyRecorded);
        }
        round.mark_recorded();

        self.p1_points = self.p1_points.saturating_add(round.p1_points());
        self.p2_points = self.p2_points.saturating_add(round.p2_points());
        self.rounds_played += 1;
        self.first_player = self.first_player.other();

        debug!(
            p1_points = self.p1_points,
            p2_points = self.p2_points,
            rounds = self.rounds_played,
            winner = ?self.winner(),
            "round recorded"
        );
        Ok(())
    }
}
