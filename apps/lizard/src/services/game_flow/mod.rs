//! Game flow orchestration: turns caller actions into engine transitions.
//!
//! Every mutation follows the same steps: take the game's lock, load the
//! record, apply engine functions to a copy, let bot seats act until a human
//! must, roll over finished rounds, then store the copy. A rejected action
//! returns before the store is touched.

mod bot_coordinator;
mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::services::locks::GameLocks;
use crate::store::{GameRecord, GameStore, InMemoryGameStore};

pub struct GameService {
    store: Arc<dyn GameStore>,
    config: EngineConfig,
    locks: GameLocks,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            locks: GameLocks::new(),
        }
    }

    /// Service over a fresh in-memory store.
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(Arc::new(InMemoryGameStore::new()), config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn require_record(&self, game_id: Uuid) -> Result<GameRecord, AppError> {
        self.store.get(game_id)?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("game not found: {game_id}")).into()
        })
    }

    /// Apply `f` to a copy of the record under the game's lock and store the
    /// result only if `f` succeeds.
    pub(crate) fn mutate<F>(&self, game_id: Uuid, f: F) -> Result<GameRecord, AppError>
    where
        F: FnOnce(&mut GameRecord) -> Result<(), AppError>,
    {
        // Unknown ids must not leave a lock entry behind.
        self.require_record(game_id)?;
        let lock = self.locks.lock_for(game_id);
        let _guard = lock.lock();

        let mut record = self
            .require_record(game_id)
            .inspect_err(|_| self.locks.forget(game_id))?;
        f(&mut record)?;
        self.store.put(record.clone())?;
        Ok(record)
    }
}

pub(crate) fn ensure_seat(record: &GameRecord, seat: u8) -> Result<(), AppError> {
    if (seat as usize) < record.seats.len() {
        Ok(())
    } else {
        Err(DomainError::not_found(
            NotFoundKind::Seat,
            format!("seat {seat} not found in game {}", record.id),
        )
        .into())
    }
}

/// Plural suffix for a count in log lines.
pub(crate) fn plural_suffix(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

pub(crate) fn game_over_error() -> AppError {
    DomainError::validation(ValidationKind::GameOver, "game is over").into()
}
