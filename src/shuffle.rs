//! The process-wide shuffle source.
//!
//! [`DeckOption::Shuffle`](crate::DeckOption::Shuffle) draws from one shared
//! `ChaCha8Rng`. It is created lazily on first use from a clock-derived seed
//! (or [`DEFAULT_SEED`] without `std`), and can be reseeded at any time with
//! [`seed`] for reproducible output:
//!
//! ```
//! use deckrs::{Deck, DeckOption, shuffle};
//!
//! shuffle::seed(7);
//! let first = Deck::new([DeckOption::Shuffle]);
//! shuffle::seed(7);
//! let second = Deck::new([DeckOption::Shuffle]);
//! assert_eq!(first, second);
//! ```
//!
//! Access is serialized by a lock, so concurrent use is memory-safe, but the
//! order in which concurrent callers draw from the source is not. Callers that
//! need reproducible shuffles across threads should use
//! [`DeckOption::ShuffleSeeded`](crate::DeckOption::ShuffleSeeded) or
//! [`DeckOption::shuffle_with`](crate::DeckOption::shuffle_with) instead.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::sync::Mutex;

/// Seed used for the shared source when no clock is available.
pub const DEFAULT_SEED: u64 = 0x5eed_dec4;

static SHARED: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

/// Reseeds the shared source.
///
/// The next [`Shuffle`](crate::DeckOption::Shuffle) after this call produces
/// the same permutation as [`ShuffleSeeded(seed)`](crate::DeckOption::ShuffleSeeded).
pub fn seed(seed: u64) {
    log::debug!("shared shuffle source seeded with {seed}");
    SHARED.replace(Some(ChaCha8Rng::seed_from_u64(seed)));
}

/// Reseeds the shared source from the clock (or [`DEFAULT_SEED`] without `std`).
pub fn reseed_from_entropy() {
    SHARED.replace(Some(entropy_rng()));
}

/// Shuffles with the shared source, creating it if needed.
pub(crate) fn shuffle_shared(cards: &mut [Card]) {
    let mut rng = SHARED.lock();
    cards.shuffle(rng.get_or_insert_with(entropy_rng));
}

/// Shuffles with a private generator; the shared source is untouched.
pub(crate) fn shuffle_seeded(cards: &mut [Card], seed: u64) {
    cards.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
}

fn entropy_rng() -> ChaCha8Rng {
    let seed = entropy_seed();
    log::debug!("shared shuffle source seeded from entropy");
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(feature = "std")]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(DEFAULT_SEED, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(not(feature = "std"))]
const fn entropy_seed() -> u64 {
    DEFAULT_SEED
}
