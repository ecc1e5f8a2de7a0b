//! Table configuration.

use crate::error::OptionsError;

/// Rounding mode for payouts that land on half a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Table limits and session defaults.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_min_bet(5)
///     .with_max_bet(1000)
///     .with_starting_balance(2000);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Largest accepted bet.
    pub max_bet: usize,
    /// Balance at the start of a session.
    pub starting_balance: usize,
    /// Bet selected at the start of a session.
    pub default_bet: usize,
    /// Amount added or removed by one bet adjustment step.
    pub bet_step: usize,
    /// Suggested pause between the player standing and the dealer playing.
    pub dealer_delay_ms: u32,
    /// Rounding mode for blackjack payouts on odd bets.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 10,
            max_bet: 500,
            starting_balance: 500,
            default_bet: 50,
            bet_step: 10,
            dealer_delay_ms: 1000,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, amount: usize) -> Self {
        self.min_bet = amount;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, amount: usize) -> Self {
        self.max_bet = amount;
        self
    }

    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, amount: usize) -> Self {
        self.starting_balance = amount;
        self
    }

    /// Sets the bet selected when a session starts.
    #[must_use]
    pub const fn with_default_bet(mut self, amount: usize) -> Self {
        self.default_bet = amount;
        self
    }

    /// Sets the bet adjustment step.
    #[must_use]
    pub const fn with_bet_step(mut self, step: usize) -> Self {
        self.bet_step = step;
        self
    }

    /// Sets the dealer pacing delay in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_delay_ms(0);
    /// assert_eq!(options.dealer_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_dealer_delay_ms(mut self, delay_ms: u32) -> Self {
        self.dealer_delay_ms = delay_ms;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Checks that the limits are consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum bet is zero, the minimum is above the
    /// maximum, the default bet is outside the limits, or the starting balance
    /// cannot cover the minimum bet.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.min_bet == 0 {
            return Err(OptionsError::ZeroMinimum);
        }
        if self.min_bet > self.max_bet {
            return Err(OptionsError::MinimumAboveMaximum);
        }
        if self.default_bet < self.min_bet || self.default_bet > self.max_bet {
            return Err(OptionsError::DefaultOutOfRange);
        }
        if self.starting_balance < self.min_bet {
            return Err(OptionsError::BalanceBelowMinimum);
        }
        Ok(())
    }

    /// Returns whether `amount` is an acceptable bet against `balance`.
    #[must_use]
    pub const fn accepts_bet(&self, amount: usize, balance: usize) -> bool {
        amount >= self.min_bet && amount <= self.max_bet && amount <= balance
    }

    /// Clamps a requested bet to the table limits, then to the balance.
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default();
    /// assert_eq!(options.clamp_bet(5, 500), 10);
    /// assert_eq!(options.clamp_bet(1000, 500), 500);
    /// assert_eq!(options.clamp_bet(300, 120), 120);
    /// ```
    #[must_use]
    pub fn clamp_bet(&self, amount: usize, balance: usize) -> usize {
        amount.max(self.min_bet).min(self.max_bet).min(balance)
    }
}
