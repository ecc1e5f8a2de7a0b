//! Settlement and ledger tests.

use bjtable::{HandOutcome, Ledger, RoundingMode, Settlement, Tally, settle};

fn settle_default(player: u8, dealer: u8, cards: usize, bet: usize) -> Settlement {
    settle(player, dealer, cards, bet, RoundingMode::Down)
}

#[test]
fn higher_score_wins_double() {
    let result = settle_default(20, 19, 2, 50);
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.winnings, 100);
    assert_eq!(result.tally, Tally::Win);
}

#[test]
fn dealer_bust_wins_double() {
    let result = settle_default(18, 22, 2, 50);
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.winnings, 100);
}

#[test]
fn player_bust_loses_whatever_the_dealer_has() {
    for dealer in [17, 21, 22, 26] {
        let result = settle_default(22, dealer, 3, 50);
        assert_eq!(result.outcome, HandOutcome::Loss);
        assert_eq!(result.winnings, 0);
        assert_eq!(result.tally, Tally::Loss);
    }
}

#[test]
fn dealer_higher_loses() {
    let result = settle_default(18, 20, 2, 50);
    assert_eq!(result.outcome, HandOutcome::Loss);
    assert_eq!(result.winnings, 0);
}

#[test]
fn tie_returns_stake() {
    let result = settle_default(20, 20, 2, 50);
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(result.winnings, 50);
    assert_eq!(result.tally, Tally::Push);
}

#[test]
fn two_card_21_pays_blackjack() {
    let result = settle_default(21, 18, 2, 50);
    assert_eq!(result.outcome, HandOutcome::Blackjack);
    assert_eq!(result.winnings, 125);
    assert_eq!(result.tally, Tally::Win);

    let against_bust = settle_default(21, 23, 2, 50);
    assert_eq!(against_bust.outcome, HandOutcome::Blackjack);
    assert_eq!(against_bust.winnings, 125);
    assert_eq!(against_bust.tally, Tally::Win);
}

#[test]
fn three_card_21_is_not_blackjack() {
    let result = settle_default(21, 17, 3, 50);
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.winnings, 100);
}

#[test]
fn blackjack_against_dealer_21_pushes() {
    let result = settle_default(21, 21, 2, 50);
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(result.winnings, 50);
}

#[test]
fn odd_bet_blackjack_follows_rounding_mode() {
    assert_eq!(settle(21, 18, 2, 15, RoundingMode::Down).winnings, 37);
    assert_eq!(settle(21, 18, 2, 15, RoundingMode::Up).winnings, 38);
    assert_eq!(settle(21, 18, 2, 15, RoundingMode::Nearest).winnings, 38);
}

#[test]
fn ledger_counts_each_settlement_once() {
    let mut ledger = Ledger::new(500);
    assert!(ledger.debit(50));
    ledger.record(&settle_default(21, 18, 2, 50));

    assert_eq!(ledger.balance(), 575);
    assert_eq!(ledger.games_played(), 1);
    assert_eq!(ledger.wins(), 1);
    assert_eq!(ledger.losses(), 0);
    assert_eq!(ledger.max_win(), 125);

    assert!(ledger.debit(50));
    ledger.record(&settle_default(20, 20, 2, 50));
    assert_eq!(ledger.games_played(), 2);
    assert_eq!(ledger.wins(), 1);
    assert_eq!(ledger.losses(), 0);
    assert_eq!(ledger.balance(), 575);
    assert_eq!(ledger.max_win(), 125);
}

#[test]
fn ledger_refuses_overdraft() {
    let mut ledger = Ledger::new(40);
    assert!(!ledger.debit(50));
    assert_eq!(ledger.balance(), 40);
}

#[test]
fn win_rate_rounds_to_whole_percent() {
    let mut ledger = Ledger::new(500);
    ledger.record(&settle_default(20, 19, 2, 10));
    ledger.record(&settle_default(18, 19, 2, 10));
    ledger.record(&settle_default(22, 19, 3, 10));
    assert_eq!(ledger.win_rate(), 33);

    ledger.record(&settle_default(20, 19, 2, 10));
    ledger.record(&settle_default(20, 19, 2, 10));
    ledger.record(&settle_default(20, 20, 2, 10));
    // 3 wins out of 6 games.
    assert_eq!(ledger.win_rate(), 50);

    let mut twothirds = Ledger::new(500);
    twothirds.record(&settle_default(20, 19, 2, 10));
    twothirds.record(&settle_default(20, 19, 2, 10));
    twothirds.record(&settle_default(18, 19, 2, 10));
    assert_eq!(twothirds.win_rate(), 67);
}
