use dashmap::DashMap;
use uuid::Uuid;

use super::{GameRecord, GameStore};
use crate::error::AppError;

/// Process-local store. Records are cloned in and out, so a caller never
/// holds a reference into the map.
#[derive(Default)]
pub struct InMemoryGameStore {
    games: DashMap<Uuid, GameRecord>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for InMemoryGameStore {
    fn get(&self, id: Uuid) -> Result<Option<GameRecord>, AppError> {
        Ok(self.games.get(&id).map(|entry| entry.value().clone()))
    }

    fn put(&self, record: GameRecord) -> Result<(), AppError> {
        self.games.insert(record.id, record);
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.games.remove(&id).is_some())
    }
}
