//! The single 52-card deck a round is dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards.
///
/// Cards are drawn from the end of the backing vector, so the last element is
/// the top of the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    regenerations: usize,
}

impl Deck {
    /// Builds the 52 cards of a standard deck in suit-then-rank order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self {
            cards,
            regenerations: 0,
        }
    }

    /// Creates a freshly shuffled 52-card deck.
    ///
    /// The permutation is a Fisher-Yates shuffle driven by `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck from explicit cards. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            regenerations: 0,
        }
    }

    /// Removes and returns the top card.
    ///
    /// An empty deck is first replaced by a new shuffled 52-card deck, so a
    /// draw always yields a card. The replacement forgets every card already
    /// dealt from the old deck.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }

            let regenerations = self.regenerations + 1;
            log::warn!("deck exhausted, replacing it with a new shuffled deck");
            *self = Self::shuffled(rng);
            self.regenerations = regenerations;
        }
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the deck was replaced after running out.
    #[must_use]
    pub const fn regenerations(&self) -> usize {
        self.regenerations
    }
}
