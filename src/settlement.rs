//! Outcome decision and payout calculation.

use crate::hand::BLACKJACK;
use crate::options::RoundingMode;
use crate::result::HandOutcome;

/// Blackjack pays 3:2 on top of the returned stake.
pub const BLACKJACK_PAYS: f64 = 1.5;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Which session counter a settled round moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tally {
    /// Counts as a win.
    Win,
    /// Counts as a loss.
    Loss,
    /// Counts as neither.
    Push,
}

/// The decided outcome of a round and the amount paid back to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome shown to the player.
    pub outcome: HandOutcome,
    /// Amount credited to the balance, stake included.
    pub winnings: usize,
    /// Counter to increment in the ledger.
    pub tally: Tally,
}

/// Decides a round.
///
/// Rules are checked in order and the first match wins: player bust, dealer
/// bust, dealer higher, player higher, tie. A two-card 21 against a dealer
/// without 21 then overrides the payout to 2.5x the bet while keeping the
/// counter chosen by the earlier rule.
///
/// ```
/// use bjtable::{HandOutcome, RoundingMode, Tally, settle};
///
/// let natural = settle(21, 18, 2, 50, RoundingMode::Down);
/// assert_eq!(natural.outcome, HandOutcome::Blackjack);
/// assert_eq!(natural.winnings, 125);
/// assert_eq!(natural.tally, Tally::Win);
/// ```
#[must_use]
pub fn settle(
    player_score: u8,
    dealer_score: u8,
    player_hand_size: usize,
    bet: usize,
    rounding: RoundingMode,
) -> Settlement {
    let mut settlement = if player_score > BLACKJACK {
        Settlement {
            outcome: HandOutcome::Loss,
            winnings: 0,
            tally: Tally::Loss,
        }
    } else if dealer_score > BLACKJACK || player_score > dealer_score {
        Settlement {
            outcome: HandOutcome::Win,
            winnings: bet * 2,
            tally: Tally::Win,
        }
    } else if dealer_score > player_score {
        Settlement {
            outcome: HandOutcome::Loss,
            winnings: 0,
            tally: Tally::Loss,
        }
    } else {
        Settlement {
            outcome: HandOutcome::Push,
            winnings: bet,
            tally: Tally::Push,
        }
    };

    if player_score == BLACKJACK && player_hand_size == 2 && dealer_score != BLACKJACK {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let bonus = round_amount(bet as f64 * BLACKJACK_PAYS, rounding);
        settlement.outcome = HandOutcome::Blackjack;
        settlement.winnings = bet + bonus;
    }

    settlement
}
