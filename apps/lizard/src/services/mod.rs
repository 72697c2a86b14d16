//! Caller-facing services over the rules engine.

pub mod game_flow;
pub mod games;
pub mod locks;

pub use game_flow::GameService;
pub use games::{GameView, SeatView};
