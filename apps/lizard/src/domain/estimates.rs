use crate::domain::round::{phase, Round};
use crate::domain::rules::validate_estimate;
use crate::domain::state::Phase;
use crate::domain::turn_order::current_player_index;
use crate::errors::domain::{DomainError, ValidationKind};

/// Record `estimate` for the seat whose turn it is to estimate.
///
/// Returns a new round; the input is left untouched. The round enters PLAY
/// once the last seat has estimated.
pub fn make_estimate(round: &Round, estimate: i32) -> Result<Round, DomainError> {
    if phase(round)? != Phase::Estimation {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Current round is not in estimation phase",
        ));
    }
    let value = validate_estimate(estimate, round.number)?;
    let seat = current_player_index(round)?;

    let mut next = round.clone();
    let slot = next
        .player_estimates
        .get_mut(seat as usize)
        .ok_or_else(|| DomainError::invariant(format!("no estimate slot for player {seat}")))?;
    *slot = Some(value);
    Ok(next)
}

/// Record estimates in turn order, stopping at the first rejected one.
pub fn make_estimates<I>(round: &Round, estimates: I) -> Result<Round, DomainError>
where
    I: IntoIterator<Item = i32>,
{
    estimates
        .into_iter()
        .try_fold(round.clone(), |r, e| make_estimate(&r, e))
}
