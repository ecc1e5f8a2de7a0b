//! Snapshot of everything a front end needs to draw the table.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Continuation, Game, RoundState};
use crate::hand::CardView;
use crate::ledger::Ledger;
use crate::message::Message;

/// Session statistics as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of settled rounds.
    pub games_played: u32,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Win percentage, rounded.
    pub win_rate: u32,
    /// Largest single payout.
    pub max_win: usize,
}

impl From<&Ledger> for Stats {
    fn from(ledger: &Ledger) -> Self {
        Self {
            games_played: ledger.games_played(),
            wins: ledger.wins(),
            losses: ledger.losses(),
            win_rate: ledger.win_rate(),
            max_win: ledger.max_win(),
        }
    }
}

/// Which commands currently make sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// A new round can be dealt.
    pub can_deal: bool,
    /// The player may hit.
    pub can_hit: bool,
    /// The player may stand.
    pub can_stand: bool,
}

/// Render state of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current balance.
    pub balance: usize,
    /// Selected bet.
    pub bet: usize,
    /// Round state.
    pub state: RoundState,
    /// Player cards, all face up.
    pub player_cards: Vec<Card>,
    /// Dealer cards with their face-down flags.
    pub dealer_cards: Vec<CardView>,
    /// Player score.
    pub player_score: u8,
    /// Dealer score counting only the cards face up.
    pub dealer_score: u8,
    /// Latest status message.
    pub message: Message,
    /// Payout of the last settled round.
    pub last_winnings: usize,
    /// Session statistics.
    pub stats: Stats,
    /// Deferred step waiting to run.
    pub pending: Option<Continuation>,
    /// Command availability.
    pub controls: Controls,
}

impl Game {
    /// Builds a snapshot of the table for rendering.
    #[must_use]
    pub fn view(&self) -> TableView {
        let player = self.player_hand();
        let dealer = self.dealer_hand();
        let in_player_turn = self.state() == RoundState::PlayerTurn;

        TableView {
            balance: self.balance(),
            bet: self.bet(),
            state: self.state(),
            player_cards: player.cards().to_vec(),
            dealer_cards: dealer.card_views().collect(),
            player_score: player.value(),
            dealer_score: dealer.visible_value(),
            message: self.message().clone(),
            last_winnings: self.last_result().map_or(0, |result| result.winnings),
            stats: Stats::from(self.ledger()),
            pending: self.pending(),
            controls: Controls {
                can_deal: !self.state().is_active() && self.bet() <= self.balance(),
                can_hit: in_player_turn,
                can_stand: in_player_turn,
            },
        }
    }
}
