//! Round state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No cards dealt; the bet can be changed.
    #[default]
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player is done; the dealer still has to play.
    DealerTurn,
    /// Round has been settled and the cards are still on the table.
    Settled,
}

impl RoundState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}

/// A deferred step the caller should run after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Play out the dealer hand and settle the round.
    ResolveDealer {
        /// Suggested pause before running it.
        delay_ms: u32,
    },
}
