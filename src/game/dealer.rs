use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealerError;
use crate::result::RoundResult;
use crate::settlement::settle;

use super::{Continuation, DEALER_STANDS_AT, Game, RoundState};

impl Game {
    /// Dealer plays their hand and the round is settled.
    ///
    /// The dealer reveals the hole card and draws while below 17, standing on
    /// soft 17 as well. The settlement is applied to the ledger and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the dealer.
    pub fn resolve_dealer(&mut self) -> Result<RoundResult, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::NotDealerTurn);
        }

        self.pending = None;
        self.dealer_hand.reveal_hole();

        let mut drawn = Vec::new();
        while self.dealer_hand.value() < DEALER_STANDS_AT {
            let card = self.draw();
            self.dealer_hand.add_card(card);
            drawn.push(card);
        }

        Ok(self.finish_round(drawn))
    }

    /// Runs the pending continuation, if any.
    ///
    /// Call this once the pause suggested by the continuation has elapsed.
    pub fn run_pending(&mut self) -> Option<RoundResult> {
        match self.pending? {
            Continuation::ResolveDealer { .. } => self.resolve_dealer().ok(),
        }
    }

    /// Drops the pending continuation without running it.
    ///
    /// The round stays on the dealer's turn; [`Game::resolve_dealer`] can
    /// still finish it.
    pub const fn cancel_pending(&mut self) -> Option<Continuation> {
        self.pending.take()
    }

    /// Settles the round against the full dealer hand and records it.
    pub(super) fn finish_round(&mut self, dealer_drawn: Vec<Card>) -> RoundResult {
        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        let settlement = settle(
            player_value,
            dealer_value,
            self.player_hand.len(),
            self.bet,
            self.options.rounding_blackjack,
        );
        self.ledger.record(&settlement);

        let result = RoundResult {
            outcome: settlement.outcome,
            tally: settlement.tally,
            bet: self.bet,
            winnings: settlement.winnings,
            player_value,
            dealer_value,
            player_bust: self.player_hand.is_bust(),
            dealer_bust: self.dealer_hand.is_bust(),
            dealer_drawn,
        };

        log::info!(
            "round settled: {:?} {player_value} v {dealer_value}, paid {} on {}, balance {}",
            result.outcome,
            result.winnings,
            result.bet,
            self.ledger.balance()
        );

        self.message = result.message();
        self.last_result = Some(result.clone());
        self.state = RoundState::Settled;
        result
    }
}
