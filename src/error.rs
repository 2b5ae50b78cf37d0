//! Error types for parsing and option construction.
//!
//! Applying options never fails; these cover the checked entry points only.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card string")]
    Empty,
    /// Input is not of the form `<rank> of <suits>`.
    #[error("expected `<rank> of <suits>` or `Joker`")]
    Malformed,
    /// Rank name not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur when building a multi-deck option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecksError {
    /// A deck must be built from at least one base deck.
    #[error("deck count must be at least one")]
    Zero,
}
