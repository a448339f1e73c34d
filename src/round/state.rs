//! Round state types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The first seat (usually the human).
    P1,
    /// The second seat (usually the bot).
    P2,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the first player to decide about the start card.
    AwaitingFirstChoice,
    /// Cards are being played.
    Playing,
    /// The remaining board has been collected; only scoring is left.
    Finished,
}
