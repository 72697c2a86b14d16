//! Round values and their move history.
//!
//! A `Round` is never mutated once returned: every transition clones the live
//! snapshot, applies the change and appends the result to `moves`. Earlier
//! snapshots stay available for replay and audit.

use serde::{Deserialize, Serialize};

use crate::domain::deck::{deal_one, prepare_deck, DealMode};
use crate::domain::rules::{validate_player_count, validate_round_number};
use crate::domain::state::{dealer_for_round, Phase, PlayerId};
use crate::domain::{Card, Trump};
use crate::errors::domain::DomainError;

/// One point in a round's history: every hand and every trick so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub hands: Vec<Vec<Card>>,
    pub tricks: Vec<Vec<Card>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based round number; also the hand size and the trick count.
    pub number: u8,
    pub number_of_players: usize,
    /// Seat that receives the first card, estimates first and leads first.
    pub dealer_offset: PlayerId,
    /// Card turned after the deal; absent when the deal used the whole deck.
    pub trump: Option<Card>,
    pub player_estimates: Vec<Option<u8>>,
    /// Append-only history; never empty.
    pub moves: Vec<Move>,
}

/// Deal a new round from a deck prepared according to `mode`.
pub fn create_round(
    round_number: u8,
    number_of_players: usize,
    mode: DealMode,
) -> Result<Round, DomainError> {
    validate_player_count(number_of_players)?;
    validate_round_number(round_number, number_of_players)?;
    create_round_from_deck(round_number, number_of_players, &prepare_deck(mode))
}

/// Deal a new round from the top of `deck`.
///
/// Card `i` goes to seat `(i + dealer_offset) mod n`; the card after the last
/// dealt one, if any, is the trump card.
pub fn create_round_from_deck(
    round_number: u8,
    number_of_players: usize,
    deck: &[Card],
) -> Result<Round, DomainError> {
    validate_player_count(number_of_players)?;
    validate_round_number(round_number, number_of_players)?;

    let dealt = round_number as usize * number_of_players;
    if deck.len() < dealt {
        return Err(DomainError::validation_other(format!(
            "Deck of {} cards cannot deal round {round_number} to {number_of_players} players",
            deck.len()
        )));
    }

    let dealer_offset = dealer_for_round(round_number, number_of_players);
    let mut hands = vec![Vec::with_capacity(round_number as usize); number_of_players];
    for (i, card) in deck[..dealt].iter().enumerate() {
        hands[(i + dealer_offset as usize) % number_of_players].push(*card);
    }
    let (trump, _) = deal_one(&deck[dealt..]);

    Ok(Round {
        number: round_number,
        number_of_players,
        dealer_offset,
        trump,
        player_estimates: vec![None; number_of_players],
        moves: vec![Move {
            hands,
            tricks: Vec::new(),
        }],
    })
}

impl Round {
    /// The live snapshot.
    pub fn last_move(&self) -> Result<&Move, DomainError> {
        self.moves
            .last()
            .ok_or_else(|| DomainError::invariant("round has no moves"))
    }

    pub fn hands(&self) -> Result<&[Vec<Card>], DomainError> {
        Ok(&self.last_move()?.hands)
    }

    pub fn tricks(&self) -> Result<&[Vec<Card>], DomainError> {
        Ok(&self.last_move()?.tricks)
    }

    pub fn hand(&self, player: PlayerId) -> Result<&[Card], DomainError> {
        self.hands()?
            .get(player as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::invariant(format!("no hand for player {player}")))
    }

    pub fn trump_suit(&self) -> Trump {
        Trump::from(self.trump)
    }

    pub fn is_trick_complete(&self, trick: &[Card]) -> bool {
        trick.len() == self.number_of_players
    }

    /// Tricks that hold one card per player, earliest first.
    pub fn completed_tricks(&self) -> Result<impl Iterator<Item = &Vec<Card>> + '_, DomainError> {
        let n = self.number_of_players;
        Ok(self.tricks()?.iter().filter(move |t| t.len() == n))
    }
}

/// ESTIMATION while any estimate is unset, PLAY while any hand holds a card,
/// DONE afterwards.
pub fn phase(round: &Round) -> Result<Phase, DomainError> {
    if round.player_estimates.iter().any(Option::is_none) {
        return Ok(Phase::Estimation);
    }
    if round.hands()?.iter().any(|h| !h.is_empty()) {
        return Ok(Phase::Play);
    }
    Ok(Phase::Done)
}

/// The last trick of the live snapshot, including a just-completed one.
pub fn current_trick(round: &Round) -> Result<Vec<Card>, DomainError> {
    Ok(round.tricks()?.last().cloned().unwrap_or_default())
}

/// The trick the next card goes into: empty once the last trick is complete.
pub fn open_trick(round: &Round) -> Result<Vec<Card>, DomainError> {
    match round.tricks()?.last() {
        Some(trick) if !round.is_trick_complete(trick) => Ok(trick.clone()),
        _ => Ok(Vec::new()),
    }
}

/// Cards dealt to the table and still accounted for (hands plus tricks).
pub fn cards_in_play(round: &Round) -> Result<usize, DomainError> {
    let m = round.last_move()?;
    let in_hands: usize = m.hands.iter().map(Vec::len).sum();
    let in_tricks: usize = m.tricks.iter().map(Vec::len).sum();
    Ok(in_hands + in_tricks)
}
