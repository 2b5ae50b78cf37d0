//! Deck construction integration tests.

use std::collections::HashMap;

use deckrs::{Card, DECK_SIZE, Deck, DeckOption, DeckOptions, DecksError, Rank, Suit, less};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

fn is_sorted_by_default_order(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}

#[test]
fn no_options_yields_base_deck() {
    let deck = Deck::new(DeckOptions::new());
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck, Deck::standard());
    assert_eq!(deck, Deck::default());
    assert_eq!(deck.jokers(), 0);
    assert_eq!(counts(&deck).len(), DECK_SIZE);
}

#[test]
fn base_deck_is_suit_major() {
    let deck = Deck::standard();
    assert_eq!(deck[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(deck[1], card(Suit::Spade, Rank::Two));
    assert_eq!(deck[12], card(Suit::Spade, Rank::King));
    assert_eq!(deck[13], card(Suit::Diamond, Rank::Ace));
    assert_eq!(deck[26], card(Suit::Club, Rank::Ace));
    assert_eq!(deck[51], card(Suit::Heart, Rank::King));
}

#[test]
fn multiple_decks() {
    for n in 1..=6 {
        let deck = Deck::new([DeckOption::decks(n).unwrap()]);
        assert_eq!(deck.len(), DECK_SIZE * n);
        assert!(counts(&deck).values().all(|&count| count == n));
    }
    assert_eq!(DeckOption::decks(0).unwrap_err(), DecksError::Zero);
}

#[test]
fn multiple_decks_replace_earlier_transformations() {
    let deck = Deck::new([
        DeckOption::Jokers(3),
        DeckOption::filter(|c| c.suit == Suit::Heart),
        DeckOption::decks(2).unwrap(),
    ]);
    assert_eq!(deck.len(), DECK_SIZE * 2);
    assert_eq!(deck.jokers(), 0);
    assert_eq!(&deck[..DECK_SIZE], Deck::standard().cards());
    assert_eq!(&deck[DECK_SIZE..], Deck::standard().cards());

    let filtered = Deck::new([
        DeckOption::decks(2).unwrap(),
        DeckOption::filter(|c| c.suit == Suit::Heart),
    ]);
    assert_eq!(filtered.len(), 78);
}

#[test]
fn default_sort_orders_by_suit_then_rank() {
    let deck = Deck::new([DeckOption::ShuffleSeeded(3), DeckOption::DefaultSort]);
    assert_eq!(deck[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(deck[DECK_SIZE - 1], card(Suit::Heart, Rank::King));
    assert!(is_sorted_by_default_order(&deck));
    assert_eq!(deck, Deck::standard());
}

#[test]
fn custom_sort_with_default_comparator_matches_default_sort() {
    let custom = Deck::new([DeckOption::ShuffleSeeded(9), DeckOption::sort(less)]);
    let default = Deck::new([DeckOption::ShuffleSeeded(9), DeckOption::DefaultSort]);
    assert_eq!(custom, default);
    assert_eq!(custom[0], card(Suit::Spade, Rank::Ace));
}

#[test]
fn custom_sort_rank_major_descending() {
    let deck = Deck::new([DeckOption::sort(|a, b| {
        (b.rank, b.suit) < (a.rank, a.suit)
    })]);
    assert_eq!(deck[0], card(Suit::Heart, Rank::King));
    assert_eq!(deck[1], card(Suit::Club, Rank::King));
    assert_eq!(deck[4], card(Suit::Heart, Rank::Queen));
    assert_eq!(deck[DECK_SIZE - 1], card(Suit::Spade, Rank::Ace));
}

#[test]
fn custom_sort_is_stable() {
    // Compare by rank only; suits within a rank keep their base-deck order.
    let deck = Deck::new([DeckOption::sort(|a, b| a.rank < b.rank)]);
    let aces: Vec<Suit> = deck[..4].iter().map(|c| c.suit).collect();
    assert_eq!(aces, Suit::STANDARD);
    assert!(deck[..4].iter().all(|c| c.rank == Rank::Ace));
}

#[test]
fn filter_removes_matches_and_keeps_order() {
    let is_low = |c: &Card| c.rank == Rank::Two || c.rank == Rank::Three;
    let deck = Deck::new([DeckOption::filter(is_low)]);

    assert_eq!(deck.len(), DECK_SIZE - 8);
    assert!(deck.iter().all(|c| !is_low(c)));

    let expected: Vec<Card> = Deck::standard().into_iter().filter(|c| !is_low(c)).collect();
    assert_eq!(deck.cards(), expected.as_slice());
}

#[test]
fn filter_matching_nothing_or_everything() {
    assert_eq!(Deck::new([DeckOption::filter(|_| false)]), Deck::standard());
    assert!(Deck::new([DeckOption::filter(|_| true)]).is_empty());
}

#[test]
fn jokers_are_appended() {
    for n in [0, 1, 3, 10] {
        let deck = Deck::new([DeckOption::Jokers(n)]);
        assert_eq!(deck.len(), DECK_SIZE + n);
        assert_eq!(deck.jokers(), n);
        assert_eq!(deck.iter().filter(|c| !c.is_joker()).count(), DECK_SIZE);
        assert!(deck[DECK_SIZE..].iter().all(Card::is_joker));
        assert_eq!(&deck[..DECK_SIZE], Deck::standard().cards());
    }
}

#[test]
fn option_order_is_significant() {
    let removed = Deck::new([DeckOption::Jokers(2), DeckOption::filter(Card::is_joker)]);
    assert_eq!(removed.len(), 52);
    assert_eq!(removed.jokers(), 0);

    let kept = Deck::new([DeckOption::filter(Card::is_joker), DeckOption::Jokers(2)]);
    assert_eq!(kept.len(), 54);
    assert_eq!(kept.jokers(), 2);
}

#[test]
fn shuffle_is_a_permutation() {
    let base = Deck::standard();
    let shuffled = Deck::new([DeckOption::Shuffle]);
    assert_eq!(shuffled.len(), base.len());
    assert_eq!(counts(&shuffled), counts(&base));
}

#[test]
fn seeded_shuffle_is_repeatable_and_private() {
    let a = Deck::new([DeckOption::ShuffleSeeded(42)]);
    let b = Deck::new([DeckOption::ShuffleSeeded(42)]);
    let c = Deck::new([DeckOption::ShuffleSeeded(43)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Deck::standard());
    assert_eq!(counts(&a), counts(&Deck::standard()));
}

#[test]
fn shuffle_with_caller_generator() {
    let a = Deck::new([DeckOption::shuffle_with(ChaCha8Rng::seed_from_u64(5))]);
    let b = Deck::new([DeckOption::ShuffleSeeded(5)]);
    assert_eq!(a, b);
}

#[test]
fn shuffle_moves_jokers_and_multiple_decks() {
    let deck = Deck::new([
        DeckOption::decks(2).unwrap(),
        DeckOption::Jokers(4),
        DeckOption::ShuffleSeeded(11),
    ]);
    assert_eq!(deck.len(), 108);
    assert_eq!(deck.jokers(), 4);
    assert!(deck[..104].iter().any(Card::is_joker));
}

#[test]
fn builder_matches_option_list() {
    let built = DeckOptions::new()
        .with_decks(2)
        .with_filter(|c| c.rank == Rank::King)
        .with_jokers(2)
        .with_seeded_shuffle(8)
        .with_sort(less)
        .build();
    let listed = Deck::new([
        DeckOption::decks(2).unwrap(),
        DeckOption::filter(|c| c.rank == Rank::King),
        DeckOption::Jokers(2),
        DeckOption::ShuffleSeeded(8),
        DeckOption::DefaultSort,
    ]);
    assert_eq!(built, listed);
    assert_eq!(built.len(), 96 + 2);
    assert!(built[96].is_joker() && built[97].is_joker());
}

#[test]
fn builder_skips_zero_decks() {
    let options = DeckOptions::new().with_decks(0).with_default_sort();
    assert_eq!(options.len(), 1);
    assert_eq!(options.build().len(), DECK_SIZE);
}

#[test]
fn options_collect_from_iterator() {
    let options: DeckOptions = (0..3).map(|_| DeckOption::Jokers(1)).collect();
    assert_eq!(options.len(), 3);
    assert_eq!(options.build().jokers(), 3);
}

#[test]
fn option_debug_names() {
    assert_eq!(format!("{:?}", DeckOption::Jokers(2)), "Jokers(2)");
    assert_eq!(format!("{:?}", DeckOption::DefaultSort), "DefaultSort");
    assert_eq!(format!("{:?}", DeckOption::sort(less)), "Sort(..)");
    assert_eq!(DeckOption::filter(Card::is_joker).name(), "filter");
}

#[test]
fn deck_display_lists_cards() {
    let deck = Deck::new([
        DeckOption::filter(|c| c.rank != Rank::Ace),
        DeckOption::Jokers(1),
    ]);
    assert_eq!(deck.to_string(), "Ace of Spades\nAce of Diamonds\nAce of Clubs\nAce of Hearts\nJoker");
}

#[test]
fn deck_into_vec() {
    let cards: Vec<Card> = Deck::new([DeckOption::Jokers(1)]).into();
    assert_eq!(cards.len(), 53);
    assert_eq!(Deck::standard().into_cards().len(), DECK_SIZE);
    assert_eq!((&Deck::standard()).into_iter().count(), DECK_SIZE);
}
