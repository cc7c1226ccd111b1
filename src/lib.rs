//! A trick-comparison card game engine with optional `no_std` support.
//!
//! Each round every player puts down one card and the highest card scores a
//! point. Ranks decide, except that a Love card always beats a Diamond card.
//! The game ends as soon as any hand is empty.
//!
//! The crate provides a [`Game`] type that deals, runs rounds, and reports
//! the winners. Card selection is delegated to a [`CardSelector`], so the
//! engine never touches a terminal.
//!
//! # Example
//!
//! ```
//! use core::ops::Range;
//! use lovetrick::{Game, GameOptions, Player};
//!
//! fn first_card(_: &Player, _: Range<usize>) -> Option<usize> {
//!     Some(0)
//! }
//!
//! let mut game = Game::new(&["Alice", "Bob"], GameOptions::default(), 42).unwrap();
//! let outcome = game.play_to_end(&mut first_card).unwrap();
//! assert_eq!(game.round_number(), 5);
//! println!("{outcome}");
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
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, OutcomeError, PlayError, RoundError, SetupError};
pub use game::{CardSelector, Game, GameState, resolve_round};
pub use hand::Hand;
pub use options::{GameOptions, MIN_PLAYERS};
pub use player::Player;
pub use result::{GameOutcome, Play, RoundResult, Standing};
