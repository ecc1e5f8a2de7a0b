//! Session balance and statistics.

use crate::settlement::{Settlement, Tally};

/// Balance and cumulative statistics for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ledger {
    balance: usize,
    games_played: u32,
    wins: u32,
    losses: u32,
    max_win: usize,
}

impl Ledger {
    /// Creates a ledger holding `balance` and no history.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            games_played: 0,
            wins: 0,
            losses: 0,
            max_win: 0,
        }
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Number of settled rounds.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Number of rounds won, naturals included.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Number of rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Largest single payout recorded.
    #[must_use]
    pub const fn max_win(&self) -> usize {
        self.max_win
    }

    /// Win percentage rounded half up, or 0 before the first round.
    ///
    /// ```
    /// use bjtable::Ledger;
    ///
    /// assert_eq!(Ledger::new(500).win_rate(), 0);
    /// ```
    #[must_use]
    pub const fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let wins = self.wins as u64;
        let games = self.games_played as u64;
        ((wins * 200 + games) / (games * 2)) as u32
    }

    /// Takes the stake of a new round off the balance.
    ///
    /// Returns `false` and leaves the balance alone if it cannot cover `amount`.
    pub const fn debit(&mut self, amount: usize) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Applies a settlement: counts the game, credits the winnings and
    /// updates the best payout.
    pub fn record(&mut self, settlement: &Settlement) {
        self.games_played += 1;
        match settlement.tally {
            Tally::Win => self.wins += 1,
            Tally::Loss => self.losses += 1,
            Tally::Push => {}
        }
        self.max_win = self.max_win.max(settlement.winnings);
        self.balance += settlement.winnings;
    }
}
