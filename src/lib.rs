//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays heads-up rounds against an
//! automated dealer: deal, hit/stand, a stand-on-17 dealer turn, outcome
//! resolution, and running session statistics. Rendering is left to the
//! caller, which polls [`Game::snapshot`] and redraws.
//!
//! # Example
//!
//! ```
//! use lonejack::{Game, RoundState};
//!
//! let game = Game::new(42);
//! game.start_round();
//! assert_eq!(game.state(), RoundState::InProgress);
//! assert_eq!(game.snapshot().player_cards.len(), 2);
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
pub mod result;
pub mod stats;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, FACE_DOWN_ASSET, Suit};
pub use error::ParseCardError;
pub use game::{Game, RoundState};
pub use hand::{DealerHand, Hand};
pub use result::{RoundOutcome, RoundSnapshot};
pub use stats::SessionStats;
