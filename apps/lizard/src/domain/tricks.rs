use crate::domain::cards_logic::is_legal_play;
use crate::domain::round::{open_trick, phase, Move, Round};
use crate::domain::state::Phase;
use crate::domain::turn_order::current_player_index;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Play `card` for the seat whose turn it is.
///
/// A new trick is opened when the last one is complete or none exists yet.
/// On success the returned round carries one more move; an illegal card yields
/// `DomainError::InvalidPlay` and the input round is unchanged.
pub fn play_card(round: &Round, card: Card) -> Result<Round, DomainError> {
    if phase(round)? != Phase::Play {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Current round is not in play phase",
        ));
    }

    let player = current_player_index(round)?;
    let hand = round.hand(player)?;
    let trick = open_trick(round)?;
    if !is_legal_play(card, hand, &trick) {
        return Err(DomainError::invalid_play(player, hand, &trick, card));
    }

    let live = round.last_move()?;
    let mut hands = live.hands.clone();
    let mut tricks = live.tricks.clone();

    match tricks.last_mut() {
        Some(t) if t.len() < round.number_of_players => t.push(card),
        _ => tricks.push(vec![card]),
    }

    let held = hands
        .get_mut(player as usize)
        .ok_or_else(|| DomainError::invariant(format!("no hand for player {player}")))?;
    let pos = held
        .iter()
        .position(|c| *c == card)
        .ok_or_else(|| DomainError::invariant(format!("{card} vanished from hand")))?;
    held.remove(pos);

    let mut next = round.clone();
    next.moves.push(Move { hands, tricks });
    Ok(next)
}

/// Play a sequence of cards, stopping at the first rejected one.
pub fn play_cards<I>(round: &Round, cards: I) -> Result<Round, DomainError>
where
    I: IntoIterator<Item = Card>,
{
    cards
        .into_iter()
        .try_fold(round.clone(), |r, c| play_card(&r, c))
}
