//! Round result types.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::card::Card;
use crate::message::{Message, MessageKind};
use crate::settlement::Tally;

/// Result of the player's hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Push (tie).
    Push,
    /// Player has a natural and the dealer does not have 21.
    Blackjack,
}

/// Record of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Ledger counter the round moved.
    pub tally: Tally,
    /// The stake placed on the round.
    pub bet: usize,
    /// Amount credited back to the balance.
    pub winnings: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_drawn: Vec<Card>,
}

impl RoundResult {
    /// Net change of the balance over the round.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
    pub const fn net(&self) -> isize {
        self.winnings as isize - self.bet as isize
    }

    /// Builds the message announcing this result.
    #[must_use]
    pub fn message(&self) -> Message {
        let (player, dealer) = (self.player_value, self.dealer_value);
        match self.outcome {
            HandOutcome::Blackjack => Message::new(MessageKind::Success, "Blackjack! 3:2 payout!"),
            HandOutcome::Loss if self.player_bust => {
                Message::new(MessageKind::Loss, "Bust! Dealer wins")
            }
            HandOutcome::Loss => Message::new(
                MessageKind::Loss,
                format!("Dealer wins {dealer} to {player}"),
            ),
            HandOutcome::Win if self.dealer_bust => {
                Message::new(MessageKind::Success, "Dealer busts! You win!")
            }
            HandOutcome::Win => Message::new(
                MessageKind::Success,
                format!("You win {player} to {dealer}!"),
            ),
            HandOutcome::Push => {
                Message::new(MessageKind::Info, format!("Push! {player} to {dealer}"))
            }
        }
    }
}
