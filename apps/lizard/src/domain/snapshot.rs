//! Read-only projection of a round, as one seat sees it.

use serde::{Deserialize, Serialize};

use crate::domain::round::{current_trick, phase, Round};
use crate::domain::state::{Phase, PlayerId};
use crate::domain::turn_order::{current_player_index, trick_winners};
use crate::domain::Card;
use crate::errors::domain::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub number: u8,
    pub trump: Option<Card>,
    pub current_trick: Vec<Card>,
    pub dealer_offset: PlayerId,
    pub phase: Phase,
    pub player_estimates: Vec<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_player_index: Option<PlayerId>,
    pub viewer_hand: Vec<Card>,
    pub trick_winners: Vec<PlayerId>,
}

/// Project `round` for `viewer`. Other seats' hands are never included.
pub fn round_snapshot(round: &Round, viewer: PlayerId) -> Result<RoundSnapshot, DomainError> {
    let phase = phase(round)?;
    let current_player_index = match phase {
        Phase::Done => None,
        Phase::Estimation | Phase::Play => Some(current_player_index(round)?),
    };
    Ok(RoundSnapshot {
        number: round.number,
        trump: round.trump,
        current_trick: current_trick(round)?,
        dealer_offset: round.dealer_offset,
        phase,
        player_estimates: round.player_estimates.clone(),
        current_player_index,
        viewer_hand: round.hand(viewer)?.to_vec(),
        trick_winners: trick_winners(round)?,
    })
}
