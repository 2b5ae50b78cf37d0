//! The deck type and the option pipeline that builds it.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::DeckOption;

/// Generates `copies` base decks back to back.
///
/// Each base deck is suit-major, rank-minor: Ace through King of Spades, then
/// Diamonds, Clubs and Hearts. This is also the default sort order, and the
/// order every seeded shuffle starts from.
pub(crate) fn base_cards(copies: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(copies * DECK_SIZE);

    for _ in 0..copies {
        for suit in Suit::STANDARD {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

/// An ordered sequence of cards, first card first.
///
/// Derefs to `[Card]`, so indexing, `len`, and `iter` work directly. No
/// uniqueness is enforced: multiple decks and jokers produce duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck by applying `options`, in order, to one base deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckOption, Rank, Suit};
    ///
    /// let deck = Deck::new([DeckOption::Jokers(2), DeckOption::DefaultSort]);
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::Ace));
    /// assert!(deck[53].is_joker());
    /// ```
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut cards = base_cards(1);
        let mut applied = 0_usize;

        for option in options {
            let name = option.name();
            option.apply(&mut cards);
            applied += 1;
            log::trace!("applied {name}: {} cards", cards.len());
        }

        log::debug!("built deck of {} cards with {applied} option(s)", cards.len());
        Self { cards }
    }

    /// The unmodified 52-card base deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: base_cards(1),
        }
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of jokers in the deck.
    #[must_use]
    pub fn jokers(&self) -> usize {
        self.cards.iter().filter(|card| card.is_joker()).count()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// One card per line.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
