//! Deck and scoring tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, DealerHand, Deck, Hand, Rank, Suit, is_soft, score};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn pair_of_aces_scores_12() {
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Ace])), 12);
    assert!(is_soft(&hand_of(&[Rank::Ace, Rank::Ace])));
}

#[test]
fn aces_soften_one_at_a_time() {
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::King, Rank::Queen])), 21);
    assert!(!is_soft(&hand_of(&[Rank::Ace, Rank::King, Rank::Queen])));
    assert_eq!(
        score(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::King, Rank::Queen])),
        24
    );
    assert_eq!(score(&hand_of(&[Rank::King, Rank::Queen, Rank::Five])), 25);
    assert_eq!(score(&[]), 0);
}

#[test]
fn oversized_slices_still_score_as_bust() {
    let aces = vec![card(Suit::Spades, Rank::Ace); 24];
    assert_eq!(score(&aces), 24);
    assert!(!is_soft(&aces));

    let aces = vec![card(Suit::Hearts, Rank::Ace); 30];
    assert_eq!(score(&aces), 30);

    let kings = vec![card(Suit::Clubs, Rank::King); 26];
    assert_eq!(score(&kings), u8::MAX);
}

#[test]
fn score_only_busts_once_every_ace_is_softened() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            for c in Rank::ALL {
                let cards = hand_of(&[a, b, c]);
                let hard: u8 = cards
                    .iter()
                    .map(|card| if card.is_ace() { 1 } else { card.value() })
                    .sum();
                let value = score(&cards);

                if hard > 21 {
                    assert_eq!(value, hard, "{a:?} {b:?} {c:?}");
                } else {
                    assert!(value <= 21, "{a:?} {b:?} {c:?}");
                    assert!(value == hard || value == hard + 10, "{a:?} {b:?} {c:?}");
                }
            }
        }
    }
}

#[test]
fn hand_tracks_bust_and_natural() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::King));
    assert!(hand.is_blackjack());
    assert!(hand.is_soft());

    let mut bust = Hand::new();
    bust.add_card(card(Suit::Hearts, Rank::Ten));
    bust.add_card(card(Suit::Spades, Rank::Ten));
    bust.add_card(card(Suit::Diamonds, Rank::Two));
    assert!(bust.is_bust());
    assert!(!bust.is_blackjack());

    bust.clear();
    assert!(bust.is_empty());
}

#[test]
fn dealer_visible_value_uses_up_card_only() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, Rank::Ace));
    dealer.add_card(card(Suit::Clubs, Rank::Six));

    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.value(), 17);
    assert!(dealer.is_soft());

    let flags: Vec<bool> = dealer.card_views().map(|view| view.face_down).collect();
    assert_eq!(flags, [false, true]);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.card_views().all(|view| !view.face_down));
}

#[test]
fn card_display_uses_suit_symbols() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).to_string(), "Q♦");
}

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let deck = Deck::shuffled(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_ne!(deck, Deck::ordered());
}

#[test]
fn draw_from_one_card_deck_empties_it() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let only = card(Suit::Clubs, Rank::Seven);
    let mut deck = Deck::from_cards(vec![only]);

    assert_eq!(deck.draw(&mut rng), only);
    assert!(deck.is_empty());
    assert_eq!(deck.regenerations(), 0);
}

#[test]
fn draw_from_empty_deck_uses_a_fresh_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::default();

    let drawn = deck.draw(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert_eq!(deck.regenerations(), 1);
    assert!(!deck.cards().contains(&drawn));
}
