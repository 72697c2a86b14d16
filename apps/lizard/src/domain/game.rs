//! Game aggregator: a table of players and the rounds dealt to it so far.

use serde::{Deserialize, Serialize};

use crate::domain::deck::DealMode;
use crate::domain::round::{create_round, phase, Round};
use crate::domain::rules::{default_rounds_to_play, max_rounds_for, validate_player_count};
use crate::domain::scoring::round_score;
use crate::domain::state::{GamePhase, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub rounds: Vec<Round>,
    pub number_of_players: usize,
    pub rounds_to_play: u8,
}

impl Game {
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn require_current_round(&self) -> Result<&Round, DomainError> {
        self.current_round()
            .ok_or_else(|| DomainError::invariant("game has no rounds"))
    }
}

/// New game without rounds. `None` or `Some(0)` plays as many rounds as the
/// deck covers.
pub fn create_game(number_of_players: usize, rounds_to_play: Option<u8>) -> Result<Game, DomainError> {
    validate_player_count(number_of_players)?;
    let max = max_rounds_for(number_of_players);
    let rounds_to_play = match rounds_to_play {
        None | Some(0) => default_rounds_to_play(number_of_players),
        Some(r) if r > max => {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoundNumber,
                format!("At most {max} rounds can be played with {number_of_players} players"),
            ))
        }
        Some(r) => r,
    };
    Ok(Game {
        rounds: Vec::new(),
        number_of_players,
        rounds_to_play,
    })
}

/// Append the next round, dealt according to `mode`.
pub fn start_next_round(game: &Game, mode: DealMode) -> Result<Game, DomainError> {
    if let Some(current) = game.current_round() {
        if phase(current)? != Phase::Done {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Round {} is still in progress", current.number),
            ));
        }
    }
    let next_number = game.rounds.len() + 1;
    if next_number > game.rounds_to_play as usize {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundNumber,
            format!("All {} rounds have been played", game.rounds_to_play),
        ));
    }
    let round = create_round(next_number as u8, game.number_of_players, mode)?;
    let mut next = game.clone();
    next.rounds.push(round);
    Ok(next)
}

/// Replace the last round with `round`.
pub fn with_current_round(game: &Game, round: Round) -> Result<Game, DomainError> {
    let mut next = game.clone();
    let slot = next
        .rounds
        .last_mut()
        .ok_or_else(|| DomainError::invariant("game has no rounds to replace"))?;
    if slot.number != round.number {
        return Err(DomainError::invariant(format!(
            "cannot replace round {} with round {}",
            slot.number, round.number
        )));
    }
    *slot = round;
    Ok(next)
}

/// Sum of round scores over every round dealt so far.
pub fn game_score(game: &Game) -> Result<Vec<i32>, DomainError> {
    let mut totals = vec![0i32; game.number_of_players];
    for round in &game.rounds {
        for (total, score) in totals.iter_mut().zip(round_score(round)?) {
            *total += score;
        }
    }
    Ok(totals)
}

/// DONE once every round was dealt and the last one finished.
pub fn game_phase(game: &Game) -> Result<GamePhase, DomainError> {
    match game.current_round() {
        Some(last)
            if game.rounds.len() == game.rounds_to_play as usize
                && phase(last)? == Phase::Done =>
        {
            Ok(GamePhase::Done)
        }
        _ => Ok(GamePhase::InProgress),
    }
}
