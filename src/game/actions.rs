use alloc::format;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::message::Message;

use super::{Continuation, Game, RoundState};

impl Game {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.state, RoundState::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::NotPlayerTurn)
        }
    }

    pub(super) const fn enter_dealer_turn(&mut self) {
        self.state = RoundState::DealerTurn;
        self.pending = Some(Continuation::ResolveDealer {
            delay_ms: self.options.dealer_delay_ms,
        });
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 reveals the dealer's hand and settles the round as a
    /// loss at once; the dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.player_hand.add_card(card);

        let value = self.player_hand.value();
        log::debug!("player hits {card}, now at {value}");

        if value > BLACKJACK {
            self.dealer_hand.reveal_hole();
            self.finish_round(Vec::new());
        } else {
            self.message = Message::info(format!("Score: {value} - Hit again?"));
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer's turn is queued as [`Continuation::ResolveDealer`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player_hand.value());
        self.message = Message::info("Dealer's turn...");
        self.enter_dealer_turn();
        Ok(())
    }
}
