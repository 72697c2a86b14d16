//! The 60-card deck: building, shuffling and dealing from the top.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{DECK_SIZE, WILDS_PER_KIND};
use crate::domain::{Card, Rank, Suit};

/// How a fresh deck is ordered before dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "seed")]
pub enum DealMode {
    /// Deal in creation order. Deterministic; used by tests and fixtures.
    Ordered,
    /// Fisher-Yates with a ChaCha20 generator seeded from the value.
    Seeded(u64),
    /// Fisher-Yates with an OS-seeded generator.
    Random,
}

/// Generate the full deck in creation order: for each suit (H, C, S, D) ranks
/// 2 through Ace, then four lizards and four snakes.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::Suited { suit, rank });
        }
    }
    deck.extend(std::iter::repeat(Card::Lizard).take(WILDS_PER_KIND));
    deck.extend(std::iter::repeat(Card::Snake).take(WILDS_PER_KIND));
    deck
}

/// Uniformly permute a copy of `deck`.
pub fn shuffle_with<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Build a deck ordered according to `mode`.
pub fn prepare_deck(mode: DealMode) -> Vec<Card> {
    let deck = build_deck();
    match mode {
        DealMode::Ordered => deck,
        DealMode::Seeded(seed) => shuffle_with(&deck, &mut ChaCha20Rng::seed_from_u64(seed)),
        DealMode::Random => shuffle_with(&deck, &mut StdRng::from_os_rng()),
    }
}

/// Take the top card, returning it with the remaining deck.
pub fn deal_one(deck: &[Card]) -> (Option<Card>, &[Card]) {
    match deck.split_first() {
        Some((top, rest)) => (Some(*top), rest),
        None => (None, deck),
    }
}
