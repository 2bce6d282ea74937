//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// Builds a standard 52-card deck and shuffles it.
///
/// The deck is the Cartesian product of the four suits and thirteen ranks,
/// permuted uniformly by [`SliceRandom::shuffle`] (Fisher-Yates). Cards are
/// dealt by popping from the back of the returned vector.
///
/// # Example
///
/// ```
/// use lonejack::deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let deck = deck::build(&mut rng);
/// assert_eq!(deck.len(), lonejack::DECK_SIZE);
/// ```
#[must_use]
pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.shuffle(rng);
    cards
}
