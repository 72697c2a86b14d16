//! Whose turn it is, recomputed from the round's history on every call.
//!
//! No "next player" is ever stored: the dealer offset plus the winners of
//! completed tricks fully determine the leader, and the length of the open
//! trick determines how far play has moved around the table.

use crate::domain::cards_logic::winning_index;
use crate::domain::round::{phase, Round};
use crate::domain::state::{nth_from, Phase, PlayerId};
use crate::errors::domain::DomainError;

/// Seat expected to act next.
///
/// During estimation: the first seat without an estimate, scanning clockwise
/// from the dealer offset. During play: the seat after the open trick's
/// leader, offset by the number of cards already in that trick. Fails once the
/// round is DONE.
pub fn current_player_index(round: &Round) -> Result<PlayerId, DomainError> {
    let n = round.number_of_players;
    match phase(round)? {
        Phase::Estimation => (0..n)
            .map(|step| nth_from(round.dealer_offset, step, n))
            .find(|&seat| {
                round
                    .player_estimates
                    .get(seat as usize)
                    .is_some_and(Option::is_none)
            })
            .ok_or_else(|| DomainError::invariant("every player has already estimated")),
        Phase::Play => {
            let leader = open_trick_leader(round)?;
            let played = match round.tricks()?.last() {
                Some(trick) if !round.is_trick_complete(trick) => trick.len(),
                _ => 0,
            };
            Ok(nth_from(leader, played, n))
        }
        Phase::Done => Err(DomainError::invariant("round is over; nobody is to act")),
    }
}

/// Winner of every completed trick, in play order.
pub fn trick_winners(round: &Round) -> Result<Vec<PlayerId>, DomainError> {
    let n = round.number_of_players;
    let trump = round.trump_suit();
    let mut leader = round.dealer_offset;
    let mut winners = Vec::with_capacity(round.number as usize);
    for trick in round.completed_tricks()? {
        let offset = winning_index(trick, trump)
            .ok_or_else(|| DomainError::invariant("completed trick has no cards"))?;
        leader = nth_from(leader, offset, n);
        winners.push(leader);
    }
    Ok(winners)
}

/// Seat leading the trick the next card goes into.
pub fn open_trick_leader(round: &Round) -> Result<PlayerId, DomainError> {
    Ok(trick_winners(round)?
        .last()
        .copied()
        .unwrap_or(round.dealer_offset))
}

/// Number of tricks each seat has won so far.
pub fn aggregate_player_wins(trick_winners: &[PlayerId], number_of_players: usize) -> Vec<u8> {
    let mut wins = vec![0u8; number_of_players];
    for &w in trick_winners {
        if let Some(slot) = wins.get_mut(w as usize) {
            *slot += 1;
        }
    }
    wins
}
