use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{ensure_seat, game_over_error, plural_suffix, GameService};
use crate::domain::{
    current_player_index, game_phase, make_estimate, phase, play_card, trick_winners,
    with_current_round, Card, GamePhase, Phase, PlayerId,
};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::games::{game_view, GameView};
use crate::store::GameRecord;

impl GameService {
    /// Submit `estimate` for `seat`, then let bots act.
    #[instrument(skip(self))]
    pub fn estimate(&self, game_id: Uuid, seat: PlayerId, estimate: i32) -> Result<GameView, AppError> {
        let record = self
            .mutate(game_id, |record| {
                expect_turn(record, seat, Phase::Estimation)?;
                apply_estimate(record, seat, estimate)?;
                self.advance(record)
            })
            .inspect_err(|e| warn!(%game_id, seat, estimate, error = %e, "Estimate rejected"))?;
        game_view(&record, seat)
    }

    /// Play `card` for `seat`, then let bots act.
    #[instrument(skip(self))]
    pub fn play(&self, game_id: Uuid, seat: PlayerId, card: Card) -> Result<GameView, AppError> {
        let record = self
            .mutate(game_id, |record| {
                expect_turn(record, seat, Phase::Play)?;
                apply_play(record, seat, card)?;
                self.advance(record)
            })
            .inspect_err(|e| warn!(%game_id, seat, %card, error = %e, "Play rejected"))?;
        game_view(&record, seat)
    }

    /// `play` with the card given in its text form (`"H10"`, `"LIZARD"`).
    pub fn play_token(&self, game_id: Uuid, seat: PlayerId, token: &str) -> Result<GameView, AppError> {
        let card: Card = token.parse()?;
        self.play(game_id, seat, card)
    }
}

/// The game must be running, its round in `expected` phase and `seat` next.
fn expect_turn(record: &GameRecord, seat: PlayerId, expected: Phase) -> Result<(), AppError> {
    ensure_seat(record, seat)?;
    if game_phase(&record.game)? == GamePhase::Done {
        return Err(game_over_error());
    }
    let round = record.game.require_current_round()?;
    if phase(round)? != expected {
        let detail = match expected {
            Phase::Estimation => "Current round is not in estimation phase",
            _ => "Current round is not in play phase",
        };
        return Err(DomainError::validation(ValidationKind::PhaseMismatch, detail).into());
    }
    if current_player_index(round)? != seat {
        let detail = match expected {
            Phase::Estimation => "Not your turn to estimate",
            _ => "Not your turn to play",
        };
        return Err(DomainError::validation(ValidationKind::OutOfTurn, detail).into());
    }
    Ok(())
}

pub(super) fn apply_estimate(
    record: &mut GameRecord,
    seat: PlayerId,
    estimate: i32,
) -> Result<(), AppError> {
    let round = make_estimate(record.game.require_current_round()?, estimate)?;
    record.game = with_current_round(&record.game, round)?;
    let line = format!(
        "- {} thinks they can win {estimate} trick{}",
        record.seat_name(seat),
        plural_suffix(i64::from(estimate)),
    );
    record.log(line);
    debug!(game_id = %record.id, seat, estimate, "Estimate recorded");
    Ok(())
}

pub(super) fn apply_play(record: &mut GameRecord, seat: PlayerId, card: Card) -> Result<(), AppError> {
    let before = record.game.require_current_round()?;
    let tricks_before = trick_winners(before)?.len();
    let round = play_card(before, card)?;
    let winners = trick_winners(&round)?;
    record.game = with_current_round(&record.game, round)?;

    let line = format!("- {} played {card}", record.seat_name(seat));
    record.log(line);
    debug!(game_id = %record.id, seat, %card, "Card played");

    if winners.len() > tricks_before {
        if let Some(&winner) = winners.last() {
            let line = format!("- Trick Winner: {}", record.seat_name(winner));
            record.log(line);
            debug!(game_id = %record.id, winner, "Trick complete");
        }
    }
    Ok(())
}
