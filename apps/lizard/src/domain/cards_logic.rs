//! Card game logic: suit obligations, comparing card strength, trick winners

use super::cards_types::{Card, Suit, Trump};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.follows(suit))
}

/// Suit that wins over every other suit in `trick`.
///
/// A suited trump card commands; otherwise the first card of the trick does,
/// which yields `None` when that card is itself wild.
pub fn commanding_suit(trick: &[Card], trump: Trump) -> Option<Suit> {
    Suit::try_from(trump)
        .ok()
        .or_else(|| trick.first().and_then(Card::suit))
}

/// Whether `challenger`, played later, takes the trick from `best`.
///
/// Lizards always win and the first one played stands. Snakes always lose, so
/// a snake only keeps the trick while nothing but snakes follow it.
pub fn card_beats(challenger: Card, best: Card, commanding: Option<Suit>) -> bool {
    match (best, challenger) {
        (Card::Lizard, _) => false,
        (_, Card::Lizard) => true,
        (_, Card::Snake) => false,
        (Card::Snake, _) => true,
        (
            Card::Suited {
                suit: best_suit,
                rank: best_rank,
            },
            Card::Suited { suit, rank },
        ) => {
            let best_follows = Some(best_suit) == commanding;
            let challenger_follows = Some(suit) == commanding;
            if best_follows && !challenger_follows {
                return false;
            }
            if challenger_follows && !best_follows {
                return true;
            }
            // Off-suit against off-suit: the earlier card stands
            if suit != best_suit {
                return false;
            }
            rank > best_rank
        }
    }
}

/// Index of the winning card in `trick`, `None` for an empty trick.
pub fn winning_index(trick: &[Card], trump: Trump) -> Option<usize> {
    let commanding = commanding_suit(trick, trump);
    let mut plays = trick.iter().copied().enumerate();
    let (mut best_idx, mut best) = plays.next()?;
    for (idx, card) in plays {
        if card_beats(card, best, commanding) {
            best_idx = idx;
            best = card;
        }
    }
    Some(best_idx)
}

/// Whether `card` may be played from `hand` into `trick`.
///
/// Wild cards can always be played, and a trick led by a wild card carries no
/// suit obligation. Otherwise the led suit must be followed when possible.
pub fn is_legal_play(card: Card, hand: &[Card], trick: &[Card]) -> bool {
    if !hand.contains(&card) {
        return false;
    }
    if card.is_wild() {
        return true;
    }
    let Some(lead) = trick.first().and_then(Card::suit) else {
        return true;
    };
    !hand_has_suit(hand, lead) || card.follows(lead)
}

/// Every card of `hand` that may be played into `trick`, in hand order.
pub fn legal_plays(hand: &[Card], trick: &[Card]) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&c| is_legal_play(c, hand, trick))
        .collect()
}
