// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::deck::{prepare_deck, DealMode};
use crate::domain::rules::max_rounds_for;
use crate::domain::{Card, Rank, Suit, Trump};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

/// Any trump, including no trumps.
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![
        suit().prop_map(Trump::from),
        Just(Trump::NoTrumps),
    ]
}

pub fn suited_card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card::suited(suit, rank))
}

/// Any card, wilds weighted roughly as in the deck.
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        13 => suited_card(),
        1 => Just(Card::Lizard),
        1 => Just(Card::Snake),
    ]
}

pub fn trick(len: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), len)
}

/// A hand drawn from the deck together with a trick, with no card shared.
pub fn hand_and_trick() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    (any::<u64>(), 1usize..=10, 0usize..=4).prop_map(|(seed, hand_len, trick_len)| {
        let deck = prepare_deck(DealMode::Seeded(seed));
        let hand = deck[..hand_len].to_vec();
        let trick = deck[hand_len..hand_len + trick_len].to_vec();
        (hand, trick)
    })
}

/// Player count with a round number the deck can deal, plus a shuffle seed.
pub fn round_setup() -> impl Strategy<Value = (usize, u8, u64)> {
    (3usize..=5).prop_flat_map(|players| {
        (
            Just(players),
            1u8..=max_rounds_for(players),
            any::<u64>(),
        )
    })
}
