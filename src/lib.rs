//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals rounds from a shuffled
//! [`Deck`], takes hit/stand decisions from the player, plays the dealer's
//! fixed policy and keeps win/loss counters across rounds. Drawing is left to
//! a front end, which sends [`Intent`]s and renders the returned
//! [`RenderSnapshot`].
//!
//! # Example
//!
//! ```
//! use blackjack21::{Game, Intent, Step};
//!
//! let mut game = Game::new(42);
//! game.start_round().unwrap();
//!
//! if let Ok(Step::Render(snapshot)) = game.handle(Intent::Stand) {
//!     assert!(snapshot.outcome.is_some());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{DEALER_STAND_TOTAL, dealer_play, dealer_should_draw};
pub use deck::Deck;
pub use error::GameError;
pub use game::{CardView, Game, Intent, Phase, RenderSnapshot, RoundState, Step};
pub use hand::{BLACKJACK, Hand};
pub use result::{Outcome, SessionStats, evaluate_outcome};
