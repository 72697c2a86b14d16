//! Read side of the service: what a seat is allowed to see.

use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use super::game_flow::{ensure_seat, GameService};
use crate::domain::{game_phase, game_score, round_snapshot, GamePhase, PlayerId, RoundSnapshot};
use crate::error::AppError;
use crate::store::{GameRecord, SeatKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub name: String,
    pub kind: SeatKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game_id: Uuid,
    pub seats: Vec<SeatView>,
    pub round: Option<RoundSnapshot>,
    pub scores: Vec<i32>,
    pub phase: GamePhase,
    pub rounds_to_play: u8,
    pub log: Vec<String>,
}

impl GameService {
    /// The game as `viewer` sees it: only the viewer's own hand is included.
    #[instrument(skip(self))]
    pub fn view(&self, game_id: Uuid, viewer: PlayerId) -> Result<GameView, AppError> {
        let record = self.require_record(game_id)?;
        game_view(&record, viewer)
    }
}

pub(crate) fn game_view(record: &GameRecord, viewer: PlayerId) -> Result<GameView, AppError> {
    ensure_seat(record, viewer)?;
    let round = record
        .game
        .current_round()
        .map(|r| round_snapshot(r, viewer))
        .transpose()?;
    Ok(GameView {
        game_id: record.id,
        seats: record
            .seats
            .iter()
            .map(|s| SeatView {
                name: s.name.clone(),
                kind: s.kind,
            })
            .collect(),
        round,
        scores: game_score(&record.game)?,
        phase: game_phase(&record.game)?,
        rounds_to_play: record.game.rounds_to_play,
        log: record.log.iter().map(|e| e.message.clone()).collect(),
    })
}
