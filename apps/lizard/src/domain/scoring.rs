use crate::domain::round::Round;
use crate::domain::turn_order::{aggregate_player_wins, trick_winners};
use crate::errors::domain::DomainError;

pub const EXACT_BASE: i32 = 20;
pub const POINTS_PER_TRICK: i32 = 10;

/// Score for one seat: exact estimates earn `20 + 10 * estimate`, misses cost
/// 10 per trick of difference.
pub fn score_for(estimate: u8, actual_wins: u8) -> i32 {
    let estimate = estimate as i32;
    let actual = actual_wins as i32;
    if estimate == actual {
        EXACT_BASE + POINTS_PER_TRICK * estimate
    } else {
        -POINTS_PER_TRICK * (actual - estimate).abs()
    }
}

/// Per-seat score for a round. Seats without an estimate score 0.
///
/// Only completed tricks count, so an unfinished round can be scored as it
/// stands.
pub fn round_score(round: &Round) -> Result<Vec<i32>, DomainError> {
    let wins = aggregate_player_wins(&trick_winners(round)?, round.number_of_players);
    Ok(round
        .player_estimates
        .iter()
        .zip(wins)
        .map(|(estimate, won)| estimate.map_or(0, |e| score_for(e, won)))
        .collect())
}
