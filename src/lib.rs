//! Composable playing-card deck construction with optional `no_std` support.
//!
//! A [`Deck`] starts as the 52-card base deck and is shaped by a list of
//! [`DeckOption`]s applied strictly in the order given: sorting, filtering,
//! adding jokers, shuffling, and building from several base decks.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, DeckOption, Rank, Suit};
//!
//! let deck = Deck::new([
//!     DeckOption::filter(|c| c.rank == Rank::Two),
//!     DeckOption::Jokers(2),
//!     DeckOption::ShuffleSeeded(42),
//! ]);
//! assert_eq!(deck.len(), 50);
//! assert_eq!(deck.jokers(), 2);
//! assert_eq!(Card::new(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
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
pub mod options;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, less};
pub use deck::Deck;
pub use error::{DecksError, ParseCardError};
pub use options::{DeckOption, DeckOptions};
