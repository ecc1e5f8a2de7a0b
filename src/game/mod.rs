//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{OptionsError, ResetError};
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::message::Message;
use crate::options::TableOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Continuation, RoundState};

/// Dealer keeps drawing below this score and stands on every 17, soft or hard.
pub const DEALER_STANDS_AT: u8 = 17;

const WELCOME: &str = "Place your bet and deal to start";

/// A single-player blackjack table.
///
/// The game owns the deck, both hands, the bet and the session ledger. All
/// commands run to completion before returning; the only deferred step is the
/// dealer's turn, exposed through [`Game::pending`].
#[derive(Debug, Clone)]
pub struct Game {
    options: TableOptions,
    state: RoundState,
    deck: Deck,
    /// Deck to use for the next deal instead of a fresh shuffle.
    preset_deck: Option<Deck>,
    player_hand: Hand,
    dealer_hand: DealerHand,
    bet: usize,
    ledger: Ledger,
    message: Message,
    last_result: Option<RoundResult>,
    pending: Option<Continuation>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, RoundState, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.state(), RoundState::Idle);
    /// assert_eq!(game.balance(), 500);
    /// assert_eq!(game.bet(), 50);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            state: RoundState::Idle,
            deck: Deck::default(),
            preset_deck: None,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            bet: options.default_bet,
            ledger: Ledger::new(options.starting_balance),
            message: Message::info(WELCOME),
            last_result: None,
            pending: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a new session after validating the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are inconsistent.
    pub fn try_new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options, seed))
    }

    /// Uses `deck` for the next deal instead of a freshly shuffled deck.
    ///
    /// Cards are drawn from the end of the deck. Useful for replays and tests.
    pub fn preset_deck(&mut self, deck: Deck) {
        self.preset_deck = Some(deck);
    }

    fn draw(&mut self) -> Card {
        let card = self.deck.draw(&mut self.rng);
        log::debug!("drew {card}");
        card
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the selected bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the session ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the latest status message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the deferred step waiting to run, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<Continuation> {
        self.pending
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Clears the table after a settled round.
    ///
    /// Hands and the deck are discarded; the ledger and the bet are kept.
    /// Does nothing while idle.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is being played.
    pub fn start_next_round(&mut self) -> Result<(), ResetError> {
        match self.state {
            RoundState::PlayerTurn | RoundState::DealerTurn => Err(ResetError::RoundInProgress),
            RoundState::Idle => Ok(()),
            RoundState::Settled => {
                self.clear_round();
                self.message = Message::info(WELCOME);
                Ok(())
            }
        }
    }

    /// Same as [`Game::start_next_round`].
    ///
    /// # Errors
    ///
    /// Returns an error while a round is being played.
    pub fn reset(&mut self) -> Result<(), ResetError> {
        self.start_next_round()
    }

    /// Restores the session to its starting balance, bet and empty statistics.
    ///
    /// Abandoning a round in progress forfeits its stake and must be
    /// `confirmed`; outside a round no confirmation is needed.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError::ConfirmationRequired`] when a round is active and
    /// `confirmed` is false.
    pub fn reset_session(&mut self, confirmed: bool) -> Result<(), ResetError> {
        if self.state.is_active() && !confirmed {
            return Err(ResetError::ConfirmationRequired);
        }

        log::info!(
            "session reset after {} games, balance was {}",
            self.ledger.games_played(),
            self.ledger.balance()
        );

        self.clear_round();
        self.pending = None;
        self.preset_deck = None;
        self.ledger = Ledger::new(self.options.starting_balance);
        self.bet = self.options.default_bet;
        self.last_result = None;
        self.message = Message::info("Game reset - Place your bet");
        Ok(())
    }

    fn clear_round(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.deck = Deck::default();
        self.state = RoundState::Idle;
    }
}
