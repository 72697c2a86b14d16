//! Per-game mutation locks.
//!
//! At most one mutation runs per game id at a time; different games never
//! wait on each other.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct GameLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock guarding `id`, created on first use.
    pub fn lock_for(&self, id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    pub fn forget(&self, id: Uuid) {
        self.locks.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
