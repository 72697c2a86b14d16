#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{AiError, BotKind, MockPlayer, Player, RandomBot};
pub use config::{DealStyle, EngineConfig};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{GameService, GameView};
pub use store::{GameRecord, GameStore, InMemoryGameStore, Seat, SeatKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
