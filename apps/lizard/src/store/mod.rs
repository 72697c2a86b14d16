//! Game persistence seam.
//!
//! The service depends on `GameStore` only; callers inject an implementation
//! (`Arc<dyn GameStore>`).

mod memory;
mod record;

pub use memory::InMemoryGameStore;
pub use record::{GameRecord, LogEntry, Seat, SeatKind};
use uuid::Uuid;

use crate::error::AppError;

pub trait GameStore: Send + Sync {
    fn get(&self, id: Uuid) -> Result<Option<GameRecord>, AppError>;
    fn put(&self, record: GameRecord) -> Result<(), AppError>;
    /// Returns whether a record was removed.
    fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
