use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 5;
pub const MAX_ROUND_NUMBER: u8 = 20;
pub const DECK_SIZE: usize = 60;
pub const WILDS_PER_KIND: usize = 4;

/// Rounds played when the caller does not choose: as many as the deck allows.
pub fn default_rounds_to_play(number_of_players: usize) -> u8 {
    max_rounds_for(number_of_players)
}

/// Largest round number whose deal fits in one deck.
pub fn max_rounds_for(number_of_players: usize) -> u8 {
    if number_of_players == 0 {
        return 0;
    }
    let fit = DECK_SIZE / number_of_players;
    fit.min(MAX_ROUND_NUMBER as usize) as u8
}

pub fn validate_player_count(number_of_players: usize) -> Result<(), DomainError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&number_of_players) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {number_of_players}"),
        ))
    }
}

/// Round numbers run 1..=20 and the deal (`round * players`) must fit in the deck.
pub fn validate_round_number(round_number: u8, number_of_players: usize) -> Result<(), DomainError> {
    if round_number == 0 || round_number > MAX_ROUND_NUMBER {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundNumber,
            format!("Round number must be between 1 and {MAX_ROUND_NUMBER}, got {round_number}"),
        ));
    }
    if round_number as usize * number_of_players > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundNumber,
            format!("Round {round_number} needs more than {DECK_SIZE} cards for {number_of_players} players"),
        ));
    }
    Ok(())
}

pub fn valid_estimate_range(round_number: u8) -> RangeInclusive<i32> {
    0..=round_number as i32
}

/// Check an estimate against the round's bounds, narrowing it to a trick count.
pub fn validate_estimate(estimate: i32, round_number: u8) -> Result<u8, DomainError> {
    if estimate < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidEstimate,
            "Estimate cannot be less than 0",
        ));
    }
    if estimate > round_number as i32 {
        return Err(DomainError::validation(
            ValidationKind::InvalidEstimate,
            format!("Estimate cannot be larger than {round_number}"),
        ));
    }
    Ok(estimate as u8)
}
