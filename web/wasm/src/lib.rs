use bjtable::{
    Card, CardView, Continuation, Game, HandOutcome, MessageKind, RoundResult, RoundState, Suit,
    TableOptions, TableView,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.game.place_bet(amount as usize).map_err(js_err)
    }

    pub fn request_bet(&mut self, amount: u32) -> Result<u32, JsValue> {
        self.game
            .request_bet(amount as usize)
            .map(|bet| bet as u32)
            .map_err(js_err)
    }

    pub fn adjust_bet(&mut self, steps: i32) -> Result<u32, JsValue> {
        self.game
            .adjust_bet(steps as isize)
            .map(|bet| bet as u32)
            .map_err(js_err)
    }

    pub fn set_min_bet(&mut self) -> Result<u32, JsValue> {
        self.game.set_min_bet().map(|bet| bet as u32).map_err(js_err)
    }

    pub fn set_max_bet(&mut self) -> Result<u32, JsValue> {
        self.game.set_max_bet().map(|bet| bet as u32).map_err(js_err)
    }

    pub fn double_bet(&mut self) -> Result<u32, JsValue> {
        self.game.double_bet().map(|bet| bet as u32).map_err(js_err)
    }

    /// Returns `true` when the player was dealt a blackjack.
    pub fn deal(&mut self) -> Result<bool, JsValue> {
        self.game.deal().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn resolve_dealer(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.resolve_dealer().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(&result))
    }

    /// Runs the queued dealer turn. The page calls this after `pending_delay_ms`.
    pub fn run_pending(&mut self) -> Result<JsValue, JsValue> {
        match self.game.run_pending() {
            Some(result) => to_js_value(&JsRoundResult::from(&result)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn cancel_pending(&mut self) -> bool {
        self.game.cancel_pending().is_some()
    }

    pub fn pending_delay_ms(&self) -> Option<u32> {
        self.game
            .pending()
            .map(|Continuation::ResolveDealer { delay_ms }| delay_ms)
    }

    pub fn next_round(&mut self) -> Result<(), JsValue> {
        self.game.start_next_round().map_err(js_err)
    }

    /// The page asks the user before passing `confirmed = true` mid-round.
    pub fn reset_session(&mut self, confirmed: bool) -> Result<(), JsValue> {
        self.game.reset_session(confirmed).map_err(js_err)
    }

    pub fn needs_reset_confirmation(&self) -> bool {
        self.game.state().is_active()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.view()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    balance: u32,
    bet: u32,
    player_cards: Vec<JsCard>,
    dealer_cards: Vec<JsDealerCard>,
    player_score: u8,
    dealer_score: u8,
    message: String,
    message_kind: &'static str,
    last_winnings: u32,
    stats: JsStats,
    pending_delay_ms: Option<u32>,
    can_deal: bool,
    can_hit: bool,
    can_stand: bool,
}

impl From<TableView> for Snapshot {
    fn from(view: TableView) -> Self {
        Self {
            state: state_to_str(view.state),
            balance: view.balance as u32,
            bet: view.bet as u32,
            player_cards: view.player_cards.into_iter().map(card_to_js).collect(),
            dealer_cards: view.dealer_cards.into_iter().map(JsDealerCard::from).collect(),
            player_score: view.player_score,
            dealer_score: view.dealer_score,
            message: view.message.text,
            message_kind: message_kind_to_str(view.message.kind),
            last_winnings: view.last_winnings as u32,
            stats: JsStats {
                games_played: view.stats.games_played,
                wins: view.stats.wins,
                losses: view.stats.losses,
                win_rate: view.stats.win_rate,
                max_win: view.stats.max_win as u32,
            },
            pending_delay_ms: view
                .pending
                .map(|Continuation::ResolveDealer { delay_ms }| delay_ms),
            can_deal: view.controls.can_deal,
            can_hit: view.controls.can_hit,
            can_stand: view.controls.can_stand,
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    games_played: u32,
    wins: u32,
    losses: u32,
    win_rate: u32,
    max_win: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsDealerCard {
    card: Option<JsCard>,
    face_down: bool,
}

impl From<CardView> for JsDealerCard {
    fn from(view: CardView) -> Self {
        Self {
            card: (!view.face_down).then(|| card_to_js(view.card)),
            face_down: view.face_down,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    bet: u32,
    winnings: u32,
    net: i32,
    player_value: u8,
    dealer_value: u8,
    player_bust: bool,
    dealer_bust: bool,
    dealer_drawn: Vec<JsCard>,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            winnings: result.winnings as u32,
            net: result.net() as i32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            player_bust: result.player_bust,
            dealer_bust: result.dealer_bust,
            dealer_drawn: result.dealer_drawn.iter().copied().map(card_to_js).collect(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        value: card.value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "heart",
        Suit::Diamonds => "diamond",
        Suit::Clubs => "club",
        Suit::Spades => "spade",
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::Idle => "Idle",
        RoundState::PlayerTurn => "PlayerTurn",
        RoundState::DealerTurn => "DealerTurn",
        RoundState::Settled => "Settled",
    }
}

fn message_kind_to_str(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "info",
        MessageKind::Success => "success",
        MessageKind::Warning => "warning",
        MessageKind::Loss => "loss",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Loss => "Loss",
        HandOutcome::Push => "Push",
        HandOutcome::Blackjack => "Blackjack",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
