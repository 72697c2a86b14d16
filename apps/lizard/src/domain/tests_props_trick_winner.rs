use proptest::prelude::*;

use crate::domain::cards_logic::{commanding_suit, winning_index};
use crate::domain::{test_gens, test_prelude, Card, Suit, Trump};

/// Independent oracle: the first lizard, else the best card of the commanding
/// suit, else the best card of the first non-snake's suit, else index 0.
fn oracle(trick: &[Card], trump: Trump) -> usize {
    if let Some(i) = trick.iter().position(|c| *c == Card::Lizard) {
        return i;
    }
    let best_of = |suit: Suit| {
        trick
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit() == Some(suit))
            .fold(None::<(usize, Card)>, |best, (i, c)| match best {
                Some((_, b)) if b.rank() >= c.rank() => best,
                _ => Some((i, *c)),
            })
            .map(|(i, _)| i)
    };
    if let Some(i) = commanding_suit(trick, trump).and_then(best_of) {
        return i;
    }
    trick
        .iter()
        .find_map(Card::suit)
        .and_then(best_of)
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The comparator agrees with the oracle for every trick size the table allows.
    #[test]
    fn prop_winner_matches_oracle(
        len in 1usize..=5,
        trump in test_gens::trump(),
        seed in any::<u64>(),
    ) {
        let deck = crate::domain::deck::prepare_deck(crate::domain::DealMode::Seeded(seed));
        let trick = &deck[..len];
        prop_assert_eq!(winning_index(trick, trump), Some(oracle(trick, trump)));
    }

    /// A lizard anywhere wins, and the first one played holds.
    #[test]
    fn prop_first_lizard_wins(
        mut trick in test_gens::trick(4),
        pos in 0usize..4,
        trump in test_gens::trump(),
    ) {
        trick[pos] = Card::Lizard;
        let first = trick.iter().position(|c| *c == Card::Lizard);
        prop_assert_eq!(winning_index(&trick, trump), first);
    }

    /// A snake never wins unless every card is a snake.
    #[test]
    fn prop_snake_never_wins(
        trick in test_gens::trick(5),
        trump in test_gens::trump(),
    ) {
        let winner = winning_index(&trick, trump).unwrap();
        if trick.iter().all(|c| *c == Card::Snake) {
            prop_assert_eq!(winner, 0);
        } else {
            prop_assert_ne!(trick[winner], Card::Snake);
        }
    }

    /// The winner is always a position within the trick.
    #[test]
    fn prop_winner_in_bounds(
        len in 1usize..=5,
        trump in test_gens::trump(),
        trick in test_gens::trick(5),
    ) {
        let trick = &trick[..len];
        let winner = winning_index(trick, trump).unwrap();
        prop_assert!(winner < len);
    }
}
