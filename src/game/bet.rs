use alloc::format;

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::BLACKJACK;
use crate::message::{Message, MessageKind};

use super::{Game, RoundState};

impl Game {
    /// Selects the bet for the next round.
    ///
    /// Allowed while idle or after a settled round. A rejected bet leaves the
    /// current bet unchanged and sets a warning message.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, or the amount is outside
    /// the table limits or above the balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state.is_active() {
            log::warn!("bet change to {amount} rejected: round in progress");
            self.message = Message::warning("Can't change bet during game");
            return Err(BetError::RoundInProgress);
        }

        let balance = self.ledger.balance();
        if !self.options.accepts_bet(amount, balance) {
            log::warn!("bet of {amount} rejected with balance {balance}");
            self.message = if amount > balance {
                Message::warning("Insufficient funds")
            } else {
                Message::warning(format!(
                    "Bet must be between {} and {}",
                    self.options.min_bet, self.options.max_bet
                ))
            };
            return Err(BetError::InvalidBet);
        }

        self.bet = amount;
        Ok(())
    }

    /// Clamps a typed-in amount to the table limits and the balance, then
    /// places it.
    ///
    /// Returns the bet that was placed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the balance cannot cover
    /// even the minimum bet.
    pub fn request_bet(&mut self, amount: usize) -> Result<usize, BetError> {
        let clamped = self.options.clamp_bet(amount, self.ledger.balance());
        self.place_bet(clamped)?;
        Ok(clamped)
    }

    /// Moves the bet by `steps` adjustment steps (negative to lower it),
    /// clamped like [`Game::request_bet`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the balance cannot cover
    /// even the minimum bet.
    pub fn adjust_bet(&mut self, steps: isize) -> Result<usize, BetError> {
        let step = isize::try_from(self.options.bet_step).unwrap_or(isize::MAX);
        let delta = steps.saturating_mul(step);
        self.request_bet(self.bet.saturating_add_signed(delta))
    }

    /// Selects the table minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the balance is below the
    /// minimum.
    pub fn set_min_bet(&mut self) -> Result<usize, BetError> {
        let amount = self.options.min_bet;
        self.place_bet(amount)?;
        Ok(amount)
    }

    /// Selects the largest bet the table and the balance allow.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the balance is below the
    /// minimum.
    pub fn set_max_bet(&mut self) -> Result<usize, BetError> {
        let amount = self.options.max_bet.min(self.ledger.balance());
        self.place_bet(amount)?;
        Ok(amount)
    }

    /// Doubles the bet, capped at the table maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the doubled bet exceeds
    /// the balance.
    pub fn double_bet(&mut self) -> Result<usize, BetError> {
        let amount = self.options.max_bet.min(self.bet.saturating_mul(2));
        self.place_bet(amount)?;
        Ok(amount)
    }

    /// Starts a round: takes the stake, shuffles a new deck and deals two
    /// cards to the player, then two to the dealer.
    ///
    /// A settled round still on the table is cleared first. If the player is
    /// dealt 21 the round moves straight to the dealer's turn and `true` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the bet exceeds
    /// the balance.
    pub fn deal(&mut self) -> Result<bool, DealError> {
        if self.state.is_active() {
            log::warn!("deal rejected: round in progress");
            self.message = Message::warning("Game already in progress");
            return Err(DealError::RoundInProgress);
        }

        if !self.ledger.debit(self.bet) {
            log::warn!(
                "deal rejected: bet {} exceeds balance {}",
                self.bet,
                self.ledger.balance()
            );
            self.message = Message::warning("Insufficient funds");
            return Err(DealError::InsufficientFunds);
        }

        if self.state == RoundState::Settled {
            self.clear_round();
        }

        self.deck = self
            .preset_deck
            .take()
            .unwrap_or_else(|| Deck::shuffled(&mut self.rng));

        for _ in 0..2 {
            let card = self.draw();
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw();
            self.dealer_hand.add_card(card);
        }

        let player_value = self.player_hand.value();
        log::debug!(
            "dealt bet {}: player {player_value}, dealer shows {}",
            self.bet,
            self.dealer_hand.visible_value()
        );

        if player_value == BLACKJACK {
            self.message = Message::new(MessageKind::Success, "Blackjack!");
            self.enter_dealer_turn();
            Ok(true)
        } else {
            self.message = Message::info("Your turn - Hit or Stand?");
            self.state = RoundState::PlayerTurn;
            Ok(false)
        }
    }
}
