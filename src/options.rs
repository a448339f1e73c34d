//! Game configuration options.

/// Number of cards dealt to each hand per deal.
pub const HAND_SIZE: usize = 3;

/// Number of face-up cards on the board after the opening deal.
pub const OPENING_BOARD_SIZE: usize = 4;

/// Which deck the game is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckKind {
    /// Forty cards, ranks 1 through 10.
    #[default]
    Forty,
    /// Fifty-two cards, ranks 1 through 13.
    FiftyTwo,
}

impl DeckKind {
    /// Returns the highest rank in the deck.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        match self {
            Self::Forty => 10,
            Self::FiftyTwo => 13,
        }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub const fn size(self) -> usize {
        self.max_rank() as usize * 4
    }
}

/// How a scoring category is settled when both piles are exactly tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieRule {
    /// Nobody gets the point.
    #[default]
    Withhold,
    /// The second player gets the point.
    SecondPlayer,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shkuba::{DeckKind, GameOptions, TieRule};
///
/// let options = GameOptions::default()
///     .with_deck(DeckKind::FiftyTwo)
///     .with_tie_rule(TieRule::SecondPlayer)
///     .with_target_score(11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Deck used for every round.
    pub deck: DeckKind,
    /// Tie handling for the comparative scoring categories.
    pub tie_rule: TieRule,
    /// Points a player needs to win the match.
    pub target_score: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deck: DeckKind::Forty,
            tie_rule: TieRule::Withhold,
            target_score: 21,
        }
    }
}

impl GameOptions {
    /// Sets the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use shkuba::{DeckKind, GameOptions};
    ///
    /// let options = GameOptions::default().with_deck(DeckKind::FiftyTwo);
    /// assert_eq!(options.deck.size(), 52);
    /// ```
    #[must_use]
    pub const fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    /// Sets the tie rule.
    ///
    /// # Example
    ///
    /// ```
    /// use shkuba::{GameOptions, TieRule};
    ///
    /// let options = GameOptions::default().with_tie_rule(TieRule::SecondPlayer);
    /// assert_eq!(options.tie_rule, TieRule::SecondPlayer);
    /// ```
    #[must_use]
    pub const fn with_tie_rule(mut self, tie_rule: TieRule) -> Self {
        self.tie_rule = tie_rule;
        self
    }

    /// Sets the match target score.
    ///
    /// # Example
    ///
    /// ```
    /// use shkuba::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(11);
    /// assert_eq!(options.target_score, 11);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u16) -> Self {
        self.target_score = target_score;
        self
    }
}
