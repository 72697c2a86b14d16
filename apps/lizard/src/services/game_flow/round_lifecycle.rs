use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{plural_suffix, GameService};
use crate::domain::rules::max_rounds_for;
use crate::domain::{
    aggregate_player_wins, create_game, game_phase, game_score, phase, round_score,
    start_next_round, trick_winners, GamePhase, Phase,
};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::store::{GameRecord, Seat};

impl GameService {
    /// Create a game for `seats`, deal round 1 and let bots act.
    ///
    /// `rounds_to_play` falls back to the configured default, then to as many
    /// rounds as the deck covers. `seed` falls back to the configured seed.
    #[instrument(skip(self, seats), fields(players = seats.len()))]
    pub fn create_game(
        &self,
        seats: Vec<Seat>,
        rounds_to_play: Option<u8>,
        seed: Option<u64>,
    ) -> Result<Uuid, AppError> {
        let players = seats.len();
        let rounds = rounds_to_play.or_else(|| {
            self.config
                .default_rounds
                .map(|r| r.min(max_rounds_for(players)))
        });
        let game = create_game(players, rounds)?;

        let mut record = GameRecord {
            id: Uuid::new_v4(),
            game,
            seats,
            log: Vec::new(),
            seed: seed.or(self.config.seed),
        };
        info!(game_id = %record.id, rounds = record.game.rounds_to_play, "Game created");

        self.start_round(&mut record)?;
        self.advance(&mut record)?;
        self.store.put(record.clone())?;
        Ok(record.id)
    }

    #[instrument(skip(self))]
    pub fn delete_game(&self, game_id: Uuid) -> Result<(), AppError> {
        let lock = self.locks.lock_for(game_id);
        let removed = {
            let _guard = lock.lock();
            self.store.delete(game_id)?
        };
        self.locks.forget(game_id);
        if !removed {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("game not found: {game_id}"),
            )
            .into());
        }
        info!(%game_id, "Game deleted");
        Ok(())
    }

    /// Deal the next round and announce it.
    pub(super) fn start_round(&self, record: &mut GameRecord) -> Result<(), AppError> {
        let round_no = record.game.rounds.len() as u8 + 1;
        let mode = self.config.deal_mode(record.seed, round_no);
        record.game = start_next_round(&record.game, mode)?;
        record.log(format!("Starting round #{round_no}"));
        info!(game_id = %record.id, round_no, "Round started");
        Ok(())
    }

    /// Summarise a finished round, then either deal the next one or close the
    /// game.
    pub(super) fn finish_round(&self, record: &mut GameRecord) -> Result<(), AppError> {
        let round = record.game.require_current_round()?.clone();
        if phase(&round)? != Phase::Done {
            return Ok(());
        }

        let wins = aggregate_player_wins(&trick_winners(&round)?, round.number_of_players);
        let scores = round_score(&round)?;
        record.log("Round Summary");
        for (seat, (estimate, won)) in round.player_estimates.iter().zip(&wins).enumerate() {
            let line = format!(
                "- {} estimated {} trick{} and won {won}",
                record.seat_name(seat as u8),
                estimate.unwrap_or(0),
                plural_suffix(i64::from(estimate.unwrap_or(0))),
            );
            record.log(line);
        }
        debug!(game_id = %record.id, round_no = round.number, ?scores, "Round scored");

        if game_phase(&record.game)? == GamePhase::Done {
            let totals = game_score(&record.game)?;
            record.log("Game Over");
            for (seat, total) in totals.iter().enumerate() {
                let line = format!("- {} scored {total}", record.seat_name(seat as u8));
                record.log(line);
            }
            info!(game_id = %record.id, ?totals, "Game finished");
            return Ok(());
        }
        self.start_round(record)
    }

    /// Seat index of the first seat named `name`.
    pub fn seat_index(&self, game_id: Uuid, name: &str) -> Result<u8, AppError> {
        let record = self.require_record(game_id)?;
        let seat = record
            .seats
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(
                    NotFoundKind::Seat,
                    format!("no seat named {name}"),
                ))
            })?;
        Ok(seat as u8)
    }
}
