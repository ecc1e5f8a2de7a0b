//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when choosing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is outside the table limits or exceeds the balance.
    #[error("invalid bet")]
    InvalidBet,
    /// The bet is locked while a round is being played.
    #[error("round in progress")]
    RoundInProgress,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already being played.
    #[error("round in progress")]
    RoundInProgress,
    /// The bet exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit and stand are only accepted during the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The round is not waiting for the dealer.
    #[error("not the dealer's turn")]
    NotDealerTurn,
}

/// Errors that can occur when resetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The round must finish before the table is cleared.
    #[error("round in progress")]
    RoundInProgress,
    /// Resetting the session mid-round needs explicit confirmation.
    #[error("resetting during a round requires confirmation")]
    ConfirmationRequired,
}

/// Errors reported by [`TableOptions::validate`](crate::TableOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The minimum bet is zero.
    #[error("minimum bet must be positive")]
    ZeroMinimum,
    /// The minimum bet is above the maximum bet.
    #[error("minimum bet is above the maximum bet")]
    MinimumAboveMaximum,
    /// The default bet is outside the table limits.
    #[error("default bet is outside the table limits")]
    DefaultOutOfRange,
    /// The starting balance cannot cover the minimum bet.
    #[error("starting balance is below the minimum bet")]
    BalanceBelowMinimum,
}
