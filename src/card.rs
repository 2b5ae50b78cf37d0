//! Card types, their canonical string form, and the default ordering.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// The four standard suits are declared in their enumeration order, which is
/// the major key of the default card ordering. [`Suit::Joker`] is a sentinel:
/// any card carrying it is a joker, whatever its rank says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker sentinel.
    Joker,
}

impl Suit {
    /// The four standard suits in enumeration order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Position of the suit in the enumeration (Spade = 0, Joker = 4).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Singular name, e.g. `"Heart"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }

    /// Plural name used in card strings, e.g. `"Hearts"`.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Spade => "Spades",
            Self::Diamond => "Diamonds",
            Self::Club => "Clubs",
            Self::Heart => "Hearts",
            Self::Joker => "Jokers",
        }
    }

    fn from_plural(s: &str) -> Option<Self> {
        Self::STANDARD.into_iter().find(|suit| suit.plural() == s)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Spade, Self::Diamond, Self::Club, Self::Heart, Self::Joker]
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All thirteen ranks, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Numeric position of the rank (Ace = 1 … King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// English name, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Equality, hashing and ordering all go through [`Card::absolute_rank`], so
/// the rank of a joker never matters: any two jokers compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card. Ignored for jokers.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank::Ace,
        }
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Sort key of the default ordering: `suit order * 13 + rank value`.
    ///
    /// Ace of Spades is 1 and King of Hearts is 52. Every joker maps to 53.
    #[must_use]
    pub const fn absolute_rank(&self) -> u8 {
        let rank = if self.is_joker() { 1 } else { self.rank.value() };
        self.suit.order() * RANKS_PER_SUIT + rank
    }
}

/// The default "less than" comparator: orders cards by suit, then rank.
///
/// Pass it to [`DeckOption::sort`](crate::DeckOption::sort) to get the same
/// result as [`DeckOption::DefaultSort`](crate::DeckOption::DefaultSort).
#[must_use]
pub fn less(a: &Card, b: &Card) -> bool {
    a.absolute_rank() < b.absolute_rank()
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.absolute_rank() == other.absolute_rank()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute_rank().hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_rank().cmp(&other.absolute_rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("Joker");
        }
        write!(f, "{} of {}", self.rank, self.suit.plural())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the canonical form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        if s == "Joker" {
            return Ok(Self::joker());
        }

        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let rank = rank.parse::<Rank>()?;
        let suit = Suit::from_plural(suit).ok_or(ParseCardError::UnknownSuit)?;
        Ok(Self::new(suit, rank))
    }
}
