//! Deck construction options.
//!
//! A deck is built by applying a list of [`DeckOption`]s, in order, to the
//! base deck. Order matters: a filter only sees the cards that exist when it
//! runs.
//!
//! ```
//! use deckrs::{Deck, DeckOption};
//!
//! let kept = Deck::new([DeckOption::Jokers(2), DeckOption::filter(|c| c.is_joker())]);
//! assert_eq!(kept.len(), 52);
//!
//! let padded = Deck::new([DeckOption::filter(|c| c.is_joker()), DeckOption::Jokers(2)]);
//! assert_eq!(padded.len(), 54);
//! ```

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::num::NonZeroUsize;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::deck::{Deck, base_cards};
use crate::error::DecksError;
use crate::shuffle;

/// "Less than" comparator used by [`DeckOption::Sort`].
pub type LessFn = Box<dyn Fn(&Card, &Card) -> bool>;

/// Predicate used by [`DeckOption::Filter`]. Cards it matches are removed.
pub type FilterFn = Box<dyn Fn(&Card) -> bool>;

/// A single transformation applied while building a [`Deck`].
#[non_exhaustive]
pub enum DeckOption {
    /// Stable ascending sort by suit, then rank.
    DefaultSort,
    /// Stable sort with a custom "less than" comparator.
    ///
    /// The comparator must be a strict weak order. If it is not, the sort may
    /// panic or leave the cards in an unspecified order.
    Sort(LessFn),
    /// Removes every card the predicate matches, keeping the rest in order.
    Filter(FilterFn),
    /// Appends this many jokers to the end of the deck.
    Jokers(usize),
    /// Shuffles with the process-wide source (see [`shuffle`]).
    Shuffle,
    /// Shuffles with a private generator seeded from the value.
    ShuffleSeeded(u64),
    /// Shuffles with a caller-owned generator.
    ShuffleWith(Box<dyn RngCore>),
    /// Replaces the deck with this many freshly generated base decks.
    ///
    /// Earlier options are discarded: the result is always whole base decks,
    /// never copies of the deck built so far.
    Decks(NonZeroUsize),
}

impl DeckOption {
    /// Sort with a custom "less than" comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckOption, Rank, Suit};
    ///
    /// let deck = Deck::new([DeckOption::sort(|a, b| a.absolute_rank() > b.absolute_rank())]);
    /// assert_eq!(deck[0], Card::new(Suit::Heart, Rank::King));
    /// ```
    #[must_use]
    pub fn sort<F>(less: F) -> Self
    where
        F: Fn(&Card, &Card) -> bool + 'static,
    {
        Self::Sort(Box::new(less))
    }

    /// Remove every card matching `predicate`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOption, Rank};
    ///
    /// let deck = Deck::new([DeckOption::filter(|c| c.rank == Rank::Two)]);
    /// assert_eq!(deck.len(), 48);
    /// ```
    #[must_use]
    pub fn filter<F>(predicate: F) -> Self
    where
        F: Fn(&Card) -> bool + 'static,
    {
        Self::Filter(Box::new(predicate))
    }

    /// Shuffle with the given generator instead of the shared one.
    #[must_use]
    pub fn shuffle_with<R>(rng: R) -> Self
    where
        R: RngCore + 'static,
    {
        Self::ShuffleWith(Box::new(rng))
    }

    /// Build from `count` base decks.
    ///
    /// # Errors
    ///
    /// Returns [`DecksError::Zero`] if `count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOption, DecksError};
    ///
    /// let deck = Deck::new([DeckOption::decks(3).unwrap()]);
    /// assert_eq!(deck.len(), 156);
    /// assert_eq!(DeckOption::decks(0).unwrap_err(), DecksError::Zero);
    /// ```
    pub fn decks(count: usize) -> Result<Self, DecksError> {
        NonZeroUsize::new(count)
            .map(Self::Decks)
            .ok_or(DecksError::Zero)
    }

    /// Short name used in logs and `Debug` output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DefaultSort => "default-sort",
            Self::Sort(_) => "sort",
            Self::Filter(_) => "filter",
            Self::Jokers(_) => "jokers",
            Self::Shuffle => "shuffle",
            Self::ShuffleSeeded(_) => "shuffle-seeded",
            Self::ShuffleWith(_) => "shuffle-with",
            Self::Decks(_) => "decks",
        }
    }

    /// Applies the option to the deck under construction.
    pub(crate) fn apply(self, cards: &mut Vec<Card>) {
        match self {
            Self::DefaultSort => cards.sort(),
            Self::Sort(less) => cards.sort_by(|a, b| ordering(&less, a, b)),
            Self::Filter(predicate) => cards.retain(|card| !predicate(card)),
            Self::Jokers(count) => cards.extend(core::iter::repeat_n(Card::joker(), count)),
            Self::Shuffle => shuffle::shuffle_shared(cards),
            Self::ShuffleSeeded(seed) => shuffle::shuffle_seeded(cards, seed),
            Self::ShuffleWith(mut rng) => cards.shuffle(&mut *rng),
            Self::Decks(count) => *cards = base_cards(count.get()),
        }
    }
}

fn ordering(less: &LessFn, a: &Card, b: &Card) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultSort => f.write_str("DefaultSort"),
            Self::Sort(_) => f.write_str("Sort(..)"),
            Self::Filter(_) => f.write_str("Filter(..)"),
            Self::Jokers(count) => f.debug_tuple("Jokers").field(count).finish(),
            Self::Shuffle => f.write_str("Shuffle"),
            Self::ShuffleSeeded(seed) => f.debug_tuple("ShuffleSeeded").field(seed).finish(),
            Self::ShuffleWith(_) => f.write_str("ShuffleWith(..)"),
            Self::Decks(count) => f.debug_tuple("Decks").field(count).finish(),
        }
    }
}

/// An ordered list of [`DeckOption`]s.
///
/// Use the builder methods to assemble a pipeline, then [`build`](Self::build):
///
/// ```
/// use deckrs::DeckOptions;
///
/// let deck = DeckOptions::new()
///     .with_decks(2)
///     .with_jokers(4)
///     .with_seeded_shuffle(42)
///     .build();
/// assert_eq!(deck.len(), 108);
/// ```
#[derive(Debug, Default)]
pub struct DeckOptions {
    options: Vec<DeckOption>,
}

impl DeckOptions {
    /// Creates an empty option list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends any option.
    #[must_use]
    pub fn with(mut self, option: DeckOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a default sort.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckOptions, Rank, Suit};
    ///
    /// let deck = DeckOptions::new().with_seeded_shuffle(1).with_default_sort().build();
    /// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::Ace));
    /// ```
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with(DeckOption::DefaultSort)
    }

    /// Appends a sort with a custom "less than" comparator.
    #[must_use]
    pub fn with_sort<F>(self, less: F) -> Self
    where
        F: Fn(&Card, &Card) -> bool + 'static,
    {
        self.with(DeckOption::sort(less))
    }

    /// Appends a filter removing every card matching `predicate`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Suit};
    ///
    /// let deck = DeckOptions::new().with_filter(|c| c.suit == Suit::Club).build();
    /// assert_eq!(deck.len(), 39);
    /// ```
    #[must_use]
    pub fn with_filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&Card) -> bool + 'static,
    {
        self.with(DeckOption::filter(predicate))
    }

    /// Appends `count` jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let deck = DeckOptions::new().with_jokers(3).build();
    /// assert_eq!(deck.jokers(), 3);
    /// ```
    #[must_use]
    pub fn with_jokers(self, count: usize) -> Self {
        self.with(DeckOption::Jokers(count))
    }

    /// Appends a shuffle drawing from the shared source.
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with(DeckOption::Shuffle)
    }

    /// Appends a shuffle with a private generator seeded from `seed`.
    #[must_use]
    pub fn with_seeded_shuffle(self, seed: u64) -> Self {
        self.with(DeckOption::ShuffleSeeded(seed))
    }

    /// Appends a multi-deck option. A `count` of zero is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// assert_eq!(DeckOptions::new().with_decks(6).build().len(), 312);
    /// assert_eq!(DeckOptions::new().with_decks(0).len(), 0);
    /// ```
    #[must_use]
    pub fn with_decks(self, count: usize) -> Self {
        match DeckOption::decks(count) {
            Ok(option) => self.with(option),
            Err(_) => {
                log::debug!("ignoring multi-deck option with a count of zero");
                self
            }
        }
    }

    /// Number of options in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Builds the deck.
    #[must_use]
    pub fn build(self) -> Deck {
        Deck::new(self)
    }
}

impl IntoIterator for DeckOptions {
    type Item = DeckOption;
    type IntoIter = alloc::vec::IntoIter<DeckOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.into_iter()
    }
}

impl FromIterator<DeckOption> for DeckOptions {
    fn from_iter<I: IntoIterator<Item = DeckOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}
