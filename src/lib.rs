//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the whole round flow: betting,
//! dealing, hitting and standing, dealer play, settlement and session
//! statistics. Rendering is left to the caller, which reads a [`TableView`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, RoundState, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//! if game.state() == RoundState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! let result = game.run_pending().unwrap();
//! assert_eq!(game.state(), RoundState::Settled);
//! assert_eq!(game.balance(), 400 + result.winnings);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod message;
pub mod options;
pub mod result;
pub mod settlement;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DealerError, OptionsError, ResetError};
pub use game::{Continuation, DEALER_STANDS_AT, Game, RoundState};
pub use hand::{BLACKJACK, CardView, DealerHand, Hand, is_soft, score};
pub use ledger::Ledger;
pub use message::{Message, MessageKind};
pub use options::{RoundingMode, TableOptions};
pub use result::{HandOutcome, RoundResult};
pub use settlement::{BLACKJACK_PAYS, Settlement, Tally, settle};
pub use view::{Controls, Stats, TableView};
